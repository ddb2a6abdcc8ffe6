//! Raw-pointer adapter for an out-of-crate raster entry point.
//!
//! The real routine under test is typically a C-ABI function exported by
//! the rendering library. This module is the narrow boundary that lowers
//! a [`RasterCall`] to that convention: present optionals become
//! pointers valid for exactly the call's duration, absent optionals
//! become null, and both byte views carry their exact lengths. The call
//! itself is an opaque black box: whatever it raises is deliberately
//! not caught.

use std::ptr;

use rasterfuzz_request::{IntRect, TileOffset};

use crate::dispatch::{RasterCall, RasterCallback};

/// C-layout mirror of [`IntRect`].
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawRect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl From<&IntRect> for RawRect {
    fn from(rect: &IntRect) -> Self {
        Self {
            min_x: rect.min.x,
            min_y: rect.min.y,
            max_x: rect.max.x,
            max_y: rect.max.y,
        }
    }
}

/// C-layout mirror of [`TileOffset`].
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RawTileOffset {
    pub x: i32,
    pub y: i32,
}

impl From<&TileOffset> for RawTileOffset {
    fn from(offset: &TileOffset) -> Self {
        Self {
            x: offset.x,
            y: offset.y,
        }
    }
}

/// The external raster entry point's calling convention.
///
/// Pointer contract, upheld by [`ExternCallback`]:
/// - `render_rect` and `visible_rect` are always non-null and valid for
///   the call's duration.
/// - `tile_offset` is non-null iff `tile_size != 0`.
/// - `dirty_rect` is non-null iff a dirty rect was present on the wire.
/// - `payload` is readable for exactly `payload_len` bytes.
/// - `output` is writable for exactly `output_len` bytes.
pub type RawRasterFn = unsafe extern "C" fn(
    format: u8,
    render_rect: *const RawRect,
    visible_rect: *const RawRect,
    tile_size: u16,
    tile_offset: *const RawTileOffset,
    dirty_rect: *const RawRect,
    payload: *const u8,
    payload_len: usize,
    output: *mut u8,
    output_len: usize,
);

/// A [`RasterCallback`] backed by a raw C-ABI function pointer.
pub struct ExternCallback {
    raw: RawRasterFn,
}

impl ExternCallback {
    /// Wrap a raw entry point.
    ///
    /// # Safety
    ///
    /// The harness will invoke `raw` under the pointer contract
    /// documented on [`RawRasterFn`]. The caller must guarantee the
    /// function is sound for *any argument values* satisfying that
    /// contract, including inverted rectangles, unrecognized format
    /// tags, and arbitrary payload bytes, since all of those are legal
    /// decodes that this harness will produce.
    #[must_use]
    pub unsafe fn new(raw: RawRasterFn) -> Self {
        Self { raw }
    }
}

impl RasterCallback for ExternCallback {
    fn rasterize(&mut self, call: RasterCall<'_>) {
        let render_rect = RawRect::from(call.render_rect);
        let visible_rect = RawRect::from(call.visible_rect);
        let tile_offset = call.tile_offset.map(RawTileOffset::from);
        let dirty_rect = call.dirty_rect.map(RawRect::from);

        // SAFETY: every pointer below either derives from a live local
        // or borrowed value that outlives the call, or is null for an
        // absent optional; lengths match their views exactly. Soundness
        // of the callee itself is the `ExternCallback::new` contract.
        unsafe {
            (self.raw)(
                call.format.to_wire_byte(),
                &raw const render_rect,
                &raw const visible_rect,
                call.tile_size,
                tile_offset
                    .as_ref()
                    .map_or(ptr::null(), |offset| &raw const *offset),
                dirty_rect
                    .as_ref()
                    .map_or(ptr::null(), |rect| &raw const *rect),
                call.payload.as_ptr(),
                call.payload.len(),
                call.output.as_mut_ptr(),
                call.output.len(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rasterfuzz_request::ImageFormat;

    use super::*;
    use crate::decode::decode_request;
    use crate::dispatch::dispatch;

    /// What the C side observed, mirrored back for assertions.
    #[derive(Clone, Debug, Default)]
    struct Observed {
        format: u8,
        render_rect: (i32, i32, i32, i32),
        tile_size: u16,
        tile_offset: Option<(i32, i32)>,
        dirty_rect_null: bool,
        payload: Vec<u8>,
        output_len: usize,
    }

    static OBSERVED: Mutex<Option<Observed>> = Mutex::new(None);

    // Both tests funnel through the same static; keep them serial.
    static SERIAL: Mutex<()> = Mutex::new(());

    unsafe extern "C" fn recording_raster(
        format: u8,
        render_rect: *const RawRect,
        _visible_rect: *const RawRect,
        tile_size: u16,
        tile_offset: *const RawTileOffset,
        dirty_rect: *const RawRect,
        payload: *const u8,
        payload_len: usize,
        output: *mut u8,
        output_len: usize,
    ) {
        let rect = unsafe { &*render_rect };
        let observed = Observed {
            format,
            render_rect: (rect.min_x, rect.min_y, rect.max_x, rect.max_y),
            tile_size,
            tile_offset: if tile_offset.is_null() {
                None
            } else {
                let offset = unsafe { &*tile_offset };
                Some((offset.x, offset.y))
            },
            dirty_rect_null: dirty_rect.is_null(),
            payload: unsafe { std::slice::from_raw_parts(payload, payload_len).to_vec() },
            output_len,
        };
        // Exercise the writable view end-to-end.
        unsafe { std::slice::from_raw_parts_mut(output, output_len).fill(0xEE) };
        *OBSERVED.lock().unwrap() = Some(observed);
    }

    fn wire_input(tile_size: u16) -> Vec<u8> {
        let mut buf = vec![0x02];
        for c in [1i32, 2, 3, 4, 0, 0, 50, 50] {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        buf.extend_from_slice(&tile_size.to_le_bytes());
        if tile_size != 0 {
            buf.extend_from_slice(&9i32.to_le_bytes());
            buf.extend_from_slice(&(-9i32).to_le_bytes());
        }
        buf.push(0);
        buf.extend_from_slice(&8u32.to_le_bytes());
        buf.extend_from_slice(b"imagedat");
        buf
    }

    #[test]
    fn lowers_absent_optionals_to_null() {
        let _guard = SERIAL.lock().unwrap();
        let input = wire_input(0);
        let request = decode_request(&input).unwrap();
        assert_eq!(request.format, ImageFormat::R16);

        let mut callback = unsafe { ExternCallback::new(recording_raster) };
        dispatch(&request, &mut callback);

        let observed = OBSERVED.lock().unwrap().take().unwrap();
        assert_eq!(observed.format, 0x02);
        assert_eq!(observed.render_rect, (1, 2, 3, 4));
        assert_eq!(observed.tile_size, 0);
        assert_eq!(observed.tile_offset, None);
        assert!(observed.dirty_rect_null);
        assert_eq!(observed.payload, b"imagedat");
        assert_eq!(observed.output_len, 8);
    }

    #[test]
    fn lowers_present_tile_offset_to_valid_pointer() {
        let _guard = SERIAL.lock().unwrap();
        let input = wire_input(256);
        let request = decode_request(&input).unwrap();

        let mut callback = unsafe { ExternCallback::new(recording_raster) };
        dispatch(&request, &mut callback);

        let observed = OBSERVED.lock().unwrap().take().unwrap();
        assert_eq!(observed.tile_size, 256);
        assert_eq!(observed.tile_offset, Some((9, -9)));
    }
}
