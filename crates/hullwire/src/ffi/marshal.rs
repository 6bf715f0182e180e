//! Struct-array packing and the safe wrapper around the binary boundary.

use std::fmt;
use std::os::raw::c_int;

use nalgebra::Vector2;

use super::types::{CPoint, HullPointsFn};

/// Failure modes of the binary flow.
///
/// These are adapter-side checks; the external algorithm itself reports
/// nothing beyond the vertex count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryError {
    /// The external contract is undefined for zero points; refuse up front.
    EmptyInput,
    /// Point count does not fit the boundary's `c_int` count parameter.
    CountOverflow { count: usize },
    /// The callee reported a vertex count outside `0..=n`. Reading the
    /// output buffer past `n` would be out of bounds, so nothing is read.
    CountOutOfRange { returned: i64, capacity: usize },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryError::EmptyInput => write!(f, "hull boundary requires at least one point"),
            BoundaryError::CountOverflow { count } => {
                write!(f, "point count {count} exceeds the boundary's c_int range")
            }
            BoundaryError::CountOutOfRange { returned, capacity } => write!(
                f,
                "callee returned vertex count {returned} outside 0..={capacity}"
            ),
        }
    }
}

impl std::error::Error for BoundaryError {}

/// Element-wise copy into the fixed-layout struct array.
///
/// No validation of coordinate ranges; the boundary carries whatever the
/// caller produced.
pub fn pack_points(points: &[Vector2<f64>]) -> Vec<CPoint> {
    points.iter().map(|p| CPoint::new(p.x, p.y)).collect()
}

/// Inverse of `pack_points`.
pub fn unpack_points(raw: &[CPoint]) -> Vec<Vector2<f64>> {
    raw.iter().map(|p| Vector2::new(p.x, p.y)).collect()
}

/// Invoke a struct-flavor hull entry point over `points`.
///
/// The output buffer is allocated here with capacity `points.len()` — the
/// hull can never have more vertices than inputs — and only the reported
/// vertex count is read back, after validating it against that capacity.
///
/// # Safety
///
/// `raw` must honor the boundary contract: read exactly `count` points from
/// the first pointer and write at most `count` vertices through the third.
/// The pointers passed to it are valid for those accesses; a callee that
/// writes past the reported count or past `count` is out of contract and
/// may corrupt memory.
pub unsafe fn hull_from_points(
    raw: HullPointsFn,
    points: &[Vector2<f64>],
) -> Result<Vec<Vector2<f64>>, BoundaryError> {
    if points.is_empty() {
        return Err(BoundaryError::EmptyInput);
    }
    let count = c_int::try_from(points.len())
        .map_err(|_| BoundaryError::CountOverflow {
            count: points.len(),
        })?;

    let packed = pack_points(points);
    let mut vertices = vec![CPoint::default(); points.len()];
    let returned = raw(packed.as_ptr(), count, vertices.as_mut_ptr());

    if returned < 0 || returned as usize > vertices.len() {
        return Err(BoundaryError::CountOutOfRange {
            returned: returned as i64,
            capacity: vertices.len(),
        });
    }
    vertices.truncate(returned as usize);
    Ok(unpack_points(&vertices))
}
