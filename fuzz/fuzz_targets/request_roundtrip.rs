#![no_main]

use std::num::NonZeroU16;

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use rasterfuzz_harness::{MAX_OUTPUT_LEN, MAX_PAYLOAD_LEN, decode_request};
use rasterfuzz_request::{
    ImageFormat, IntPoint, IntRect, RenderRequest, TileOffset, Tiling,
};

// Fuzz target: seed encoder vs decode pipeline.
//
// Builds an arbitrary representable request, encodes it with the wire
// writer, and decodes the bytes back through the real pipeline.
//
// Catches bugs in:
// - Encoder/decoder field-order or width disagreement
// - Conditional-field encoding (tile offset, dirty rect presence)
// - Guard thresholds rejecting representable requests

fn arbitrary_point(u: &mut Unstructured<'_>) -> arbitrary::Result<IntPoint> {
    Ok(IntPoint {
        x: u.arbitrary()?,
        y: u.arbitrary()?,
    })
}

fn arbitrary_rect(u: &mut Unstructured<'_>) -> arbitrary::Result<IntRect> {
    Ok(IntRect {
        min: arbitrary_point(u)?,
        max: arbitrary_point(u)?,
    })
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);

    let format = ImageFormat::from_wire_byte(match u.arbitrary() {
        Ok(byte) => byte,
        Err(_) => return,
    });

    let Ok(render_rect) = arbitrary_rect(&mut u) else { return };
    let Ok(visible_rect) = arbitrary_rect(&mut u) else { return };

    let tiling = match u.arbitrary::<bool>() {
        Ok(true) => {
            let Ok(size) = u.int_in_range(1..=u16::MAX) else { return };
            let Ok(x) = u.arbitrary() else { return };
            let Ok(y) = u.arbitrary() else { return };
            Some(Tiling {
                size: NonZeroU16::new(size).expect("range starts at 1"),
                offset: TileOffset { x, y },
            })
        }
        Ok(false) => None,
        Err(_) => return,
    };

    let dirty_rect = match u.arbitrary::<bool>() {
        Ok(true) => match arbitrary_rect(&mut u) {
            Ok(rect) => Some(rect),
            Err(_) => return,
        },
        Ok(false) => None,
        Err(_) => return,
    };

    let Ok(output_len) = u.int_in_range(0..=MAX_OUTPUT_LEN - 1) else { return };

    let payload = u.take_rest();
    let payload = &payload[..payload.len().min(MAX_PAYLOAD_LEN - 1)];

    let request = RenderRequest {
        format,
        render_rect,
        visible_rect,
        tiling,
        dirty_rect,
        output_len,
        payload,
    };

    let bytes = request.to_bytes();
    assert_eq!(bytes.len(), request.encoded_len());

    let decoded = decode_request(&bytes).expect("representable request must decode");
    assert_eq!(decoded, request);
});
