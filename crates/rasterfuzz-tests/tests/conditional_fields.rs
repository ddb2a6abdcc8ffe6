//! Conditional-field consumption: the two places where a scalar's value
//! decides how many of the following bytes belong to which field.
//!
//! Getting either branch wrong desynchronizes every later field, so
//! these tests pin the exact byte accounting:
//!
//! - tile size 0  ⇒ zero offset bytes consumed, dispatch sees no offset
//! - tile size ≠0 ⇒ exactly 8 offset bytes consumed
//! - dirty flag 0 ⇒ zero rect bytes consumed, dispatch sees no rect
//! - dirty flag ≠0 (any nonzero value) ⇒ exactly 16 rect bytes consumed

use rasterfuzz_harness::{Iteration, decode_request, run_iteration};
use rasterfuzz_request::{IntPoint, IntRect, TileOffset};
use rasterfuzz_tests::{RecordingCallback, WireBuffer};

#[test]
fn zero_tile_size_consumes_no_offset_bytes() {
    // The four bytes after the zero tile size are flag 0 + output len 3,
    // then a 3-byte payload. If the decoder wrongly consumed an offset,
    // the payload would be misread or the decode would truncate.
    let input = WireBuffer::new()
        .format(0x08)
        .rect([0, 0, 10, 10])
        .rect([0, 0, 10, 10])
        .tile_size(0)
        .dirty_flag(0)
        .output_len(3)
        .payload(b"abc")
        .build();

    let request = decode_request(&input).unwrap();
    assert!(request.tiling.is_none());
    assert_eq!(request.output_len, 3);
    assert_eq!(request.payload, b"abc");

    let mut callback = RecordingCallback::default();
    assert_eq!(run_iteration(&input, &mut callback), Iteration::Dispatched);
    let call = &callback.calls[0];
    assert_eq!(call.tile_size, 0);
    assert_eq!(call.tile_offset, None);
}

#[test]
fn nonzero_tile_size_consumes_exactly_eight_offset_bytes() {
    let input = WireBuffer::new()
        .format(0x08)
        .rect([0, 0, 10, 10])
        .rect([0, 0, 10, 10])
        .tile_size(512)
        .tile_offset(-4, 11)
        .dirty_flag(0)
        .output_len(0)
        .payload(b"tail")
        .build();

    let request = decode_request(&input).unwrap();
    let tiling = request.tiling.expect("tiling must be present");
    assert_eq!(tiling.size.get(), 512);
    assert_eq!(tiling.offset, TileOffset { x: -4, y: 11 });
    // The tail landed in the payload, not in a misaligned field.
    assert_eq!(request.payload, b"tail");

    let mut callback = RecordingCallback::default();
    run_iteration(&input, &mut callback);
    let call = &callback.calls[0];
    assert_eq!(call.tile_size, 512);
    assert_eq!(call.tile_offset, Some(TileOffset { x: -4, y: 11 }));
}

#[test]
fn tile_size_one_is_enough_to_require_an_offset() {
    // The discriminant is any-nonzero, not a flag bit.
    let input = WireBuffer::new()
        .format(0x08)
        .rect([0, 0, 10, 10])
        .rect([0, 0, 10, 10])
        .tile_size(1)
        .build();

    // No offset bytes follow, so the decode must truncate rather than
    // borrow the dirty flag and output length as an offset.
    let mut callback = RecordingCallback::default();
    assert_eq!(run_iteration(&input, &mut callback), Iteration::Skipped);
}

#[test]
fn zero_dirty_flag_consumes_no_rect_bytes() {
    let input = WireBuffer::new()
        .format(0x08)
        .rect([0, 0, 10, 10])
        .rect([0, 0, 10, 10])
        .tile_size(0)
        .dirty_flag(0)
        .output_len(7)
        .build();

    let request = decode_request(&input).unwrap();
    assert_eq!(request.dirty_rect, None);
    assert_eq!(request.output_len, 7);

    let mut callback = RecordingCallback::default();
    run_iteration(&input, &mut callback);
    assert_eq!(callback.calls[0].dirty_rect, None);
}

#[test]
fn any_nonzero_dirty_flag_reads_a_rect() {
    for flag in [1u8, 2, 0x7F, 0xFF] {
        let input = WireBuffer::new()
            .format(0x08)
            .rect([0, 0, 10, 10])
            .rect([0, 0, 10, 10])
            .tile_size(0)
            .dirty_flag(flag)
            .rect([-1, -2, 3, 4])
            .output_len(0)
            .build();

        let request = decode_request(&input).unwrap();
        assert_eq!(
            request.dirty_rect,
            Some(IntRect {
                min: IntPoint { x: -1, y: -2 },
                max: IntPoint { x: 3, y: 4 },
            }),
            "flag byte 0x{flag:02X}"
        );
    }
}

#[test]
fn absent_and_zero_dirty_rect_are_distinct() {
    let absent = WireBuffer::new()
        .format(0x08)
        .rect([0, 0, 10, 10])
        .rect([0, 0, 10, 10])
        .tile_size(0)
        .dirty_flag(0)
        .output_len(0)
        .build();

    let zeroed = WireBuffer::new()
        .format(0x08)
        .rect([0, 0, 10, 10])
        .rect([0, 0, 10, 10])
        .tile_size(0)
        .dirty_flag(1)
        .rect([0, 0, 0, 0])
        .output_len(0)
        .build();

    let absent_request = decode_request(&absent).unwrap();
    let zeroed_request = decode_request(&zeroed).unwrap();

    assert_eq!(absent_request.dirty_rect, None);
    assert_eq!(
        zeroed_request.dirty_rect,
        Some(IntRect {
            min: IntPoint { x: 0, y: 0 },
            max: IntPoint { x: 0, y: 0 },
        })
    );
    assert_ne!(absent_request.dirty_rect, zeroed_request.dirty_rect);
}

#[test]
fn both_optionals_together() {
    let input = WireBuffer::new()
        .format(0x03)
        .rect([0, 0, 256, 256])
        .rect([0, 0, 256, 256])
        .tile_size(128)
        .tile_offset(1, 1)
        .dirty_flag(1)
        .rect([0, 0, 64, 64])
        .output_len(1024)
        .payload(&[0xEE; 100])
        .build();

    let mut callback = RecordingCallback::default();
    assert_eq!(run_iteration(&input, &mut callback), Iteration::Dispatched);
    let call = &callback.calls[0];
    assert_eq!(call.tile_size, 128);
    assert!(call.tile_offset.is_some());
    assert!(call.dirty_rect.is_some());
    assert_eq!(call.payload.len(), 100);
    assert_eq!(call.output_len, 1024);
}
