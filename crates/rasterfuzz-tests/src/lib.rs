#![warn(clippy::pedantic)]

//! Shared fixtures for the rasterfuzz integration tests and benches:
//! wire-buffer builders and a recording stand-in for the raster routine.

use rasterfuzz_harness::{RasterCall, RasterCallback};
use rasterfuzz_request::{ImageFormat, IntRect, RenderRequest, TileOffset};

/// Append four little-endian `i32`s in wire rect order.
pub fn push_rect(buf: &mut Vec<u8>, coords: [i32; 4]) {
    for c in coords {
        buf.extend_from_slice(&c.to_le_bytes());
    }
}

/// Builder for hand-assembled wire buffers.
///
/// Each method appends exactly the bytes of one wire field, so a test
/// reads like the wire layout it is constructing, including deliberately
/// malformed layouts a typed encoder could not produce.
#[derive(Default)]
pub struct WireBuffer {
    bytes: Vec<u8>,
}

impl WireBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn format(mut self, tag: u8) -> Self {
        self.bytes.push(tag);
        self
    }

    #[must_use]
    pub fn rect(mut self, coords: [i32; 4]) -> Self {
        push_rect(&mut self.bytes, coords);
        self
    }

    #[must_use]
    pub fn tile_size(mut self, size: u16) -> Self {
        self.bytes.extend_from_slice(&size.to_le_bytes());
        self
    }

    #[must_use]
    pub fn tile_offset(mut self, x: i32, y: i32) -> Self {
        self.bytes.extend_from_slice(&x.to_le_bytes());
        self.bytes.extend_from_slice(&y.to_le_bytes());
        self
    }

    #[must_use]
    pub fn dirty_flag(mut self, flag: u8) -> Self {
        self.bytes.push(flag);
        self
    }

    #[must_use]
    pub fn output_len(mut self, len: u32) -> Self {
        self.bytes.extend_from_slice(&len.to_le_bytes());
        self
    }

    /// Append raw output-length bytes verbatim (for malformed layouts).
    #[must_use]
    pub fn output_len_raw(mut self, bytes: [u8; 4]) -> Self {
        self.bytes.extend_from_slice(&bytes);
        self
    }

    #[must_use]
    pub fn payload(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// The end-to-end golden scenario: format 0x02, render rect 0,0,100,100,
/// visible rect 0,0,50,50, no tiling, no dirty rect, output length 16,
/// followed by exactly 32 payload bytes. Total: 72 bytes.
#[must_use]
pub fn golden_input() -> Vec<u8> {
    WireBuffer::new()
        .format(0x02)
        .rect([0, 0, 100, 100])
        .rect([0, 0, 50, 50])
        .tile_size(0)
        .dirty_flag(0)
        .output_len(16)
        .payload(&golden_payload())
        .build()
}

/// The golden scenario's 32 arbitrary payload bytes.
#[must_use]
pub fn golden_payload() -> Vec<u8> {
    hex::decode("00112233445566778899aabbccddeeff0102030405060708090a0b0c0d0e0f10")
        .expect("fixture hex is valid")
}

/// One observed invocation of the raster routine, with owned copies of
/// everything the dispatcher handed over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRecord {
    pub format: ImageFormat,
    pub render_rect: IntRect,
    pub visible_rect: IntRect,
    pub tile_size: u16,
    pub tile_offset: Option<TileOffset>,
    pub dirty_rect: Option<IntRect>,
    pub payload: Vec<u8>,
    pub output_len: usize,
}

/// Records every dispatch it receives, standing in for the real renderer.
#[derive(Default)]
pub struct RecordingCallback {
    pub calls: Vec<CallRecord>,
}

impl RasterCallback for RecordingCallback {
    fn rasterize(&mut self, call: RasterCall<'_>) {
        // Prove the output view is writable for its full length before
        // recording it.
        call.output.fill(0x42);
        self.calls.push(CallRecord {
            format: call.format,
            render_rect: *call.render_rect,
            visible_rect: *call.visible_rect,
            tile_size: call.tile_size,
            tile_offset: call.tile_offset.copied(),
            dirty_rect: call.dirty_rect.copied(),
            payload: call.payload.to_vec(),
            output_len: call.output.len(),
        });
    }
}

/// Stable multi-line rendering of a decoded request, for snapshots.
#[must_use]
pub fn describe_request(request: &RenderRequest<'_>) -> String {
    let mut out = String::new();
    let rect = |r: &IntRect| {
        format!(
            "min=({}, {}) max=({}, {})",
            r.min.x, r.min.y, r.max.x, r.max.y
        )
    };

    out.push_str(&format!("format: {:?}\n", request.format));
    out.push_str(&format!("render rect: {}\n", rect(&request.render_rect)));
    out.push_str(&format!("visible rect: {}\n", rect(&request.visible_rect)));
    match &request.tiling {
        Some(tiling) => out.push_str(&format!(
            "tiling: size={} offset=({}, {})\n",
            tiling.size, tiling.offset.x, tiling.offset.y
        )),
        None => out.push_str("tiling: absent\n"),
    }
    match &request.dirty_rect {
        Some(r) => out.push_str(&format!("dirty rect: {}\n", rect(r))),
        None => out.push_str("dirty rect: absent\n"),
    }
    out.push_str(&format!("output len: {}\n", request.output_len));
    out.push_str(&format!("payload len: {}", request.payload.len()));
    out
}
