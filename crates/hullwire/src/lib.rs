//! Marshaling layer for an out-of-process convex hull computation.
//!
//! The hull algorithm itself lives in an external native library; this crate
//! owns everything on the caller's side of that boundary:
//! - `cloud`: reproducible random point clouds to feed the algorithm.
//! - `ffi`: the fixed-layout struct flow (pack, invoke, read back).
//! - `codec`: the JSON flow (encode, bounded transfer buffers, decode).
//! - `timing`: wall-clock instrumentation around each step.
//!
//! Both flows are synchronous and per-invocation: marshal in, call once,
//! read out, drop everything.

pub mod cloud;
pub mod codec;
pub mod ffi;
pub mod timing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{draw_cloud_normal, CloudCfg, ReplayToken};
    pub use crate::codec::{
        decode_points, encode_points, hull_via_text, max_encoded_len, CodecError, TransferBuffer,
    };
    pub use crate::ffi::{
        hull_from_points, pack_points, unpack_points, BoundaryError, CPoint, HullPointsFn,
        HullTextFn,
    };
    pub use crate::timing::timed;
    pub use nalgebra::Vector2 as Vec2;
}
