//! Fixed-layout struct flow across the native call boundary.
//!
//! Purpose
//! - Define the C-compatible point struct and the boundary signatures.
//! - Marshal `Vector2<f64>` collections into struct arrays, invoke the
//!   external hull entry point, and read the vertices back.
//!
//! Why function pointers
//! - The wrapper takes the raw entry point as a typed `extern "C"` function
//!   pointer. The linked native symbol (see `sys`, feature-gated) is one such
//!   entry point; in-process doubles used by tests are another. Marshaling
//!   logic is identical either way.

mod marshal;
mod types;

#[cfg(any(feature = "link-points", feature = "link-json"))]
pub mod sys;

pub use marshal::{hull_from_points, pack_points, unpack_points, BoundaryError};
pub use types::{CPoint, HullPointsFn, HullTextFn};
