use rasterfuzz_request::{ImageFormat, IntRect, RenderRequest, TileOffset};

/// Argument set for one invocation of the raster callback.
///
/// This is the external interface of the harness, as borrowed views:
/// optionals appear as real `Option`s ("absent" is `None`, never a
/// zeroed structure), the payload view exactly matches its length, and
/// the output view is writable for its full declared length. The FFI
/// adapter lowers this to the raw-pointer convention; in-process
/// callbacks (tests, fuzz targets) consume it directly.
pub struct RasterCall<'a> {
    pub format: ImageFormat,
    pub render_rect: &'a IntRect,
    pub visible_rect: &'a IntRect,
    /// Wire tile size; 0 iff `tile_offset` is `None`.
    pub tile_size: u16,
    pub tile_offset: Option<&'a TileOffset>,
    pub dirty_rect: Option<&'a IntRect>,
    pub payload: &'a [u8],
    pub output: &'a mut [u8],
}

/// The dispatch seam: the external rendering routine under test.
///
/// The harness treats an implementation as an opaque, possibly-faulting
/// black box: nothing it does is observed, and nothing it raises is
/// caught. A panic, abort, or sanitizer trap inside `rasterize` is the
/// finding the harness exists to surface, and it propagates to the
/// process boundary unmodified.
pub trait RasterCallback {
    fn rasterize(&mut self, call: RasterCall<'_>);
}

/// Invoke the callback exactly once with a fully decoded request.
///
/// The two allocations of the whole pipeline happen here, strictly after
/// decoding validated both lengths: an owned copy of the payload (the
/// callback's calling convention requires a buffer independent of the
/// fuzzer-owned input) and the output buffer at its declared length.
/// Peak allocation is therefore bounded by the two caps in
/// [`decode`](crate::decode) no matter how large the driver's input is.
pub fn dispatch(request: &RenderRequest<'_>, callback: &mut impl RasterCallback) {
    let payload = request.payload.to_vec();
    let mut output = vec![0u8; request.output_len as usize];

    let (tile_size, tile_offset) = match &request.tiling {
        Some(tiling) => (tiling.size.get(), Some(&tiling.offset)),
        None => (0, None),
    };

    callback.rasterize(RasterCall {
        format: request.format,
        render_rect: &request.render_rect,
        visible_rect: &request.visible_rect,
        tile_size,
        tile_offset,
        dirty_rect: request.dirty_rect.as_ref(),
        payload: &payload,
        output: &mut output,
    });
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU16;

    use rasterfuzz_request::{IntPoint, Tiling};

    use super::*;

    fn rect(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> IntRect {
        IntRect {
            min: IntPoint { x: min_x, y: min_y },
            max: IntPoint { x: max_x, y: max_y },
        }
    }

    /// Records what the dispatcher actually handed over.
    #[derive(Default)]
    struct Probe {
        calls: usize,
        tile_size: u16,
        saw_tile_offset: bool,
        saw_dirty_rect: bool,
        payload: Vec<u8>,
        output_len: usize,
    }

    impl RasterCallback for Probe {
        fn rasterize(&mut self, call: RasterCall<'_>) {
            self.calls += 1;
            self.tile_size = call.tile_size;
            self.saw_tile_offset = call.tile_offset.is_some();
            self.saw_dirty_rect = call.dirty_rect.is_some();
            self.payload = call.payload.to_vec();
            self.output_len = call.output.len();
            // The output view must be writable end-to-end.
            call.output.fill(0x5A);
        }
    }

    #[test]
    fn dispatch_passes_absent_optionals_as_none() {
        let request = RenderRequest {
            format: ImageFormat::Rgba8,
            render_rect: rect(0, 0, 10, 10),
            visible_rect: rect(0, 0, 5, 5),
            tiling: None,
            dirty_rect: None,
            output_len: 16,
            payload: b"0123456789abcdef",
        };
        let mut probe = Probe::default();
        dispatch(&request, &mut probe);

        assert_eq!(probe.calls, 1);
        assert_eq!(probe.tile_size, 0);
        assert!(!probe.saw_tile_offset);
        assert!(!probe.saw_dirty_rect);
        assert_eq!(probe.payload, b"0123456789abcdef");
        assert_eq!(probe.output_len, 16);
    }

    #[test]
    fn dispatch_passes_present_optionals_through() {
        let request = RenderRequest {
            format: ImageFormat::R8,
            render_rect: rect(0, 0, 10, 10),
            visible_rect: rect(0, 0, 5, 5),
            tiling: Some(Tiling {
                size: NonZeroU16::new(64).unwrap(),
                offset: TileOffset { x: 1, y: 2 },
            }),
            dirty_rect: Some(rect(1, 1, 2, 2)),
            output_len: 0,
            payload: &[],
        };
        let mut probe = Probe::default();
        dispatch(&request, &mut probe);

        assert_eq!(probe.tile_size, 64);
        assert!(probe.saw_tile_offset);
        assert!(probe.saw_dirty_rect);
        assert_eq!(probe.output_len, 0);
    }

    #[test]
    fn output_buffer_matches_declared_length() {
        let request = RenderRequest {
            format: ImageFormat::R16,
            render_rect: rect(0, 0, 1, 1),
            visible_rect: rect(0, 0, 1, 1),
            tiling: None,
            dirty_rect: None,
            output_len: 4096,
            payload: &[],
        };
        let mut probe = Probe::default();
        dispatch(&request, &mut probe);
        assert_eq!(probe.output_len, 4096);
    }
}
