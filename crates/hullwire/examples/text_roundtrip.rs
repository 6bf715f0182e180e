//! Timing probe for the text flow against an in-process echo callee.
//!
//! Purpose
//! - Exercise the full marshaling path (encode → transfer buffers → boundary
//!   call → decode) without the native library installed, and print the
//!   wall-clock cost of each step for a mid-sized cloud.
//!
//! The echo callee copies the input document into the output buffer, so the
//! decoded collection must equal the generated one.

use std::os::raw::c_char;

use hullwire::cloud::{draw_cloud_normal, CloudCfg, ReplayToken};
use hullwire::codec::{decode_points, encode_points, max_encoded_len, TransferBuffer};
use hullwire::timing::timed;

unsafe extern "C" fn echo(input: *const c_char, output: *mut c_char) {
    let mut len = 0usize;
    while *input.add(len) != 0 {
        len += 1;
    }
    std::ptr::copy_nonoverlapping(input, output, len + 1);
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let cfg = CloudCfg {
        count: 10_000,
        scale: 100.0,
    };
    let points = timed("create_points", || {
        draw_cloud_normal(cfg, ReplayToken { seed: 1, index: 0 })
    });

    let document = timed("encode_points", || encode_points(&points)).expect("finite cloud");
    let input = TransferBuffer::from_document(&document).expect("no interior NUL");
    let mut output = TransferBuffer::with_capacity(max_encoded_len(points.len()));

    timed("boundary_call", || unsafe {
        echo(input.as_ptr(), output.as_mut_ptr())
    });

    let back = timed("decode_points", || {
        decode_points(output.document().expect("terminated document"))
    })
    .expect("echoed document decodes");

    assert_eq!(back, points);
    println!(
        "round-tripped {} points through a {}-byte transfer buffer",
        back.len(),
        output.capacity()
    );
}
