//! Native `convex_hull` symbol declarations.
//!
//! The native library is built in one of two configurations, both exporting
//! a single `convex_hull` symbol with flavor-specific signatures. Pick the
//! flavor matching the installed library via cargo features; linking both at
//! once cannot work against one library build.
//!
//! A missing or mismatched library surfaces as a link/load-time fault, not a
//! recoverable error.

#[cfg(all(feature = "link-points", feature = "link-json"))]
compile_error!("features `link-points` and `link-json` are mutually exclusive");

#[cfg(feature = "link-points")]
pub mod points {
    use crate::ffi::CPoint;
    use std::os::raw::c_int;

    #[link(name = "convex_hull")]
    extern "C" {
        /// Struct flavor: hull of `count` input points, vertices written to
        /// the caller-allocated `vertices` buffer, vertex count returned.
        pub fn convex_hull(points: *const CPoint, count: c_int, vertices: *mut CPoint) -> c_int;
    }
}

#[cfg(feature = "link-json")]
pub mod json {
    use std::os::raw::c_char;

    #[link(name = "convex_hull")]
    extern "C" {
        /// JSON flavor: input document in, result document written to the
        /// caller-allocated `output` buffer.
        pub fn convex_hull(input: *const c_char, output: *mut c_char);
    }
}
