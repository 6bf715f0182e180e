//! C-compatible point layout and boundary signatures.

use nalgebra::Vector2;
use std::os::raw::{c_char, c_int};

/// Wire-side point: two 8-byte floats, C layout, no padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CPoint {
    pub x: f64,
    pub y: f64,
}

// The boundary contract fixes the layout; fail the build if it drifts.
const _: () = assert!(std::mem::size_of::<CPoint>() == 16);
const _: () = assert!(std::mem::offset_of!(CPoint, x) == 0);
const _: () = assert!(std::mem::offset_of!(CPoint, y) == 8);

impl CPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Vector2<f64>> for CPoint {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<CPoint> for Vector2<f64> {
    #[inline]
    fn from(p: CPoint) -> Self {
        Vector2::new(p.x, p.y)
    }
}

/// Struct-flavor entry point: `(points, count, vertices_out) -> vertex count`.
///
/// The callee reads `count` points and writes at most `count` vertices into
/// the caller-allocated output buffer.
pub type HullPointsFn = unsafe extern "C" fn(*const CPoint, c_int, *mut CPoint) -> c_int;

/// JSON-flavor entry point: `(input document, output buffer)`.
///
/// Both buffers are NUL-terminated; the output buffer is caller-allocated
/// and must be large enough for the result document.
pub type HullTextFn = unsafe extern "C" fn(*const c_char, *mut c_char);
