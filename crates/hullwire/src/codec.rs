//! JSON point documents and bounded transfer buffers for the text boundary.
//!
//! Purpose
//! - Encode a point collection as `{"points": [{"x": ..., "y": ...}, ...]}`
//!   and decode the inverse. Round-trip identity over finite coordinates is
//!   the correctness property of this codec.
//!
//! Buffer sizing
//! - The boundary gives the callee no way to report truncation, so the output
//!   buffer must be big enough up front. `max_encoded_len` bounds the encoded
//!   size of any document with up to `n` points from the widest possible
//!   shortest-roundtrip float text, independent of the input document's
//!   length (an input-sized output buffer underestimates whenever the result
//!   document encodes wider than the input did).

use std::fmt;
use std::os::raw::c_char;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::ffi::HullTextFn;

/// Wire schema: one named list of {x, y} records.
#[derive(Serialize, Deserialize)]
struct PointsDoc {
    points: Vec<PointRec>,
}

#[derive(Serialize, Deserialize)]
struct PointRec {
    x: f64,
    y: f64,
}

/// Failure modes of the text flow.
#[derive(Debug)]
pub enum CodecError {
    /// JSON has no encoding for NaN or infinities; refuse before the boundary.
    NonFinite { index: usize },
    /// Serialization or parse failure from the JSON layer.
    Json(serde_json::Error),
    /// A document destined for the boundary must not contain NUL.
    InteriorNul,
    /// No NUL terminator in the buffer: the callee filled it to capacity, so
    /// the document is presumed truncated.
    Unterminated,
    /// The callee wrote bytes that are not UTF-8.
    Utf8(std::str::Utf8Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
            CodecError::Json(err) => write!(f, "json codec: {err}"),
            CodecError::InteriorNul => write!(f, "document contains an interior NUL byte"),
            CodecError::Unterminated => {
                write!(f, "output buffer has no NUL terminator (truncated document)")
            }
            CodecError::Utf8(err) => write!(f, "output document is not UTF-8: {err}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Json(err)
    }
}

/// Encode a point collection into a points document.
pub fn encode_points(points: &[Vector2<f64>]) -> Result<String, CodecError> {
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(CodecError::NonFinite { index });
    }
    let doc = PointsDoc {
        points: points.iter().map(|p| PointRec { x: p.x, y: p.y }).collect(),
    };
    Ok(serde_json::to_string(&doc)?)
}

/// Decode a points document back into a point collection.
pub fn decode_points(document: &str) -> Result<Vec<Vector2<f64>>, CodecError> {
    let doc: PointsDoc = serde_json::from_str(document)?;
    Ok(doc
        .points
        .into_iter()
        .map(|p| Vector2::new(p.x, p.y))
        .collect())
}

/// Widest shortest-roundtrip text of an `f64`, e.g. `-2.2250738585072014e-308`.
const MAX_FLOAT_TEXT: usize = 24;
/// Per-record overhead: `{"x":` + `,"y":` + `}` plus a separating comma.
const RECORD_OVERHEAD: usize = 12;
/// `{"points":[]}` around the record list.
const ENVELOPE: usize = 13;

/// Upper bound on the encoded length of a document holding up to `n` points,
/// including the NUL terminator.
pub fn max_encoded_len(n: usize) -> usize {
    ENVELOPE + n * (RECORD_OVERHEAD + 2 * MAX_FLOAT_TEXT) + 1
}

/// Fixed-capacity, zero-filled byte region passed across the text boundary.
///
/// Zero fill means any document the callee writes short of capacity is
/// NUL-terminated for free; a buffer with no NUL after the call was filled
/// to the brim and is reported as truncated.
pub struct TransferBuffer {
    buf: Vec<u8>,
}

impl TransferBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity],
        }
    }

    /// Buffer holding `document` plus a NUL terminator.
    pub fn from_document(document: &str) -> Result<Self, CodecError> {
        if document.as_bytes().contains(&0) {
            return Err(CodecError::InteriorNul);
        }
        let mut buf = vec![0u8; document.len() + 1];
        buf[..document.len()].copy_from_slice(document.as_bytes());
        Ok(Self { buf })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const c_char {
        self.buf.as_ptr() as *const c_char
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut c_char {
        self.buf.as_mut_ptr() as *mut c_char
    }

    /// The NUL-terminated document currently in the buffer.
    pub fn document(&self) -> Result<&str, CodecError> {
        let end = self
            .buf
            .iter()
            .position(|&b| b == 0)
            .ok_or(CodecError::Unterminated)?;
        std::str::from_utf8(&self.buf[..end]).map_err(CodecError::Utf8)
    }
}

/// Invoke a JSON-flavor hull entry point over `points`.
///
/// The output buffer is sized by `max_encoded_len(points.len())` — the hull
/// is a subset of the inputs, so no result document can encode wider than
/// that bound.
///
/// # Safety
///
/// `raw` must honor the boundary contract: read one NUL-terminated document
/// from the first pointer and write one NUL-free document of at most the
/// output buffer's capacity (the capacity equals `max_encoded_len` of the
/// input count) through the second. A callee that writes past that capacity
/// is out of contract and may corrupt memory.
pub unsafe fn hull_via_text(
    raw: HullTextFn,
    points: &[Vector2<f64>],
) -> Result<Vec<Vector2<f64>>, CodecError> {
    let document = encode_points(points)?;
    let input = TransferBuffer::from_document(&document)?;
    let mut output = TransferBuffer::with_capacity(max_encoded_len(points.len()));
    raw(input.as_ptr(), output.as_mut_ptr());
    decode_points(output.document()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Echoes the input document back; the identity stand-in for the callee.
    unsafe extern "C" fn echo_double(input: *const c_char, output: *mut c_char) {
        let mut len = 0usize;
        while *input.add(len) != 0 {
            len += 1;
        }
        std::ptr::copy_nonoverlapping(input, output, len + 1);
    }

    /// Writes nothing at all, like a callee that died silently.
    unsafe extern "C" fn silent_double(_input: *const c_char, _output: *mut c_char) {}

    #[test]
    fn text_flow_round_trips_through_real_buffers() {
        let pts = vec![
            Vector2::new(-12.5, 0.25),
            Vector2::new(1e-9, 3.0),
            Vector2::new(100.0, -100.0),
        ];
        let back = unsafe { hull_via_text(echo_double, &pts) }.unwrap();
        assert_eq!(back, pts);
    }

    #[test]
    fn silent_callee_surfaces_as_decode_error() {
        let pts = vec![Vector2::new(1.0, 2.0)];
        let err = unsafe { hull_via_text(silent_double, &pts) }.unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }

    #[test]
    fn encode_matches_schema() {
        let pts = vec![Vector2::new(1.5, -2.0), Vector2::new(0.0, 3.25)];
        let doc = encode_points(&pts).unwrap();
        assert_eq!(doc, r#"{"points":[{"x":1.5,"y":-2.0},{"x":0.0,"y":3.25}]}"#);
    }

    #[test]
    fn decode_inverts_encode() {
        let pts = vec![
            Vector2::new(std::f64::consts::PI, -1e-300),
            Vector2::new(f64::MAX, f64::MIN_POSITIVE),
        ];
        let back = decode_points(&encode_points(&pts).unwrap()).unwrap();
        assert_eq!(pts, back);
    }

    #[test]
    fn empty_collection_round_trips() {
        let doc = encode_points(&[]).unwrap();
        assert_eq!(doc, r#"{"points":[]}"#);
        assert!(decode_points(&doc).unwrap().is_empty());
    }

    #[test]
    fn non_finite_is_refused() {
        let pts = vec![Vector2::new(0.0, f64::NAN)];
        assert!(matches!(
            encode_points(&pts),
            Err(CodecError::NonFinite { index: 0 })
        ));
        let pts = vec![Vector2::new(1.0, 2.0), Vector2::new(f64::INFINITY, 0.0)];
        assert!(matches!(
            encode_points(&pts),
            Err(CodecError::NonFinite { index: 1 })
        ));
    }

    #[test]
    fn sizing_bound_covers_adversarial_coordinates() {
        // Widest shortest-roundtrip floats we know of.
        let nasty = [
            -2.225_073_858_507_201_4e-308,
            f64::MAX,
            -f64::MAX,
            f64::MIN_POSITIVE,
            5e-324,
            -1.234_567_890_123_456_7e-300,
        ];
        for &a in &nasty {
            for &b in &nasty {
                let pts = vec![Vector2::new(a, b); 17];
                let doc = encode_points(&pts).unwrap();
                assert!(
                    doc.len() + 1 <= max_encoded_len(pts.len()),
                    "bound too small for {a:e},{b:e}: {} > {}",
                    doc.len() + 1,
                    max_encoded_len(pts.len())
                );
            }
        }
    }

    #[test]
    fn unterminated_buffer_is_detected() {
        let mut full = TransferBuffer::with_capacity(4);
        full.buf.copy_from_slice(b"abcd");
        assert!(matches!(full.document(), Err(CodecError::Unterminated)));
    }

    #[test]
    fn transfer_buffer_round_trips_document() {
        let buf = TransferBuffer::from_document(r#"{"points":[]}"#).unwrap();
        assert_eq!(buf.capacity(), 14);
        assert_eq!(buf.document().unwrap(), r#"{"points":[]}"#);
    }

    proptest! {
        #[test]
        fn round_trip_identity(
            pts in prop::collection::vec(
                (-1e12f64..1e12, -1e12f64..1e12).prop_map(|(x, y)| Vector2::new(x, y)),
                0..64,
            )
        ) {
            let back = decode_points(&encode_points(&pts).unwrap()).unwrap();
            prop_assert_eq!(pts, back);
        }

        #[test]
        fn bound_holds_for_random_points(
            pts in prop::collection::vec(
                (any::<f64>(), any::<f64>())
                    .prop_filter("finite", |(x, y)| x.is_finite() && y.is_finite())
                    .prop_map(|(x, y)| Vector2::new(x, y)),
                0..32,
            )
        ) {
            let doc = encode_points(&pts).unwrap();
            prop_assert!(doc.len() + 1 <= max_encoded_len(pts.len()));
        }
    }
}
