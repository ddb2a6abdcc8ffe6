#![no_main]

use std::sync::Once;

use libfuzzer_sys::fuzz_target;
use rasterfuzz_harness::{RasterCall, RasterCallback, init, run_iteration};

// Fuzz target: the full decode-validate-dispatch pipeline.
//
// Catches bugs in:
// - Cursor bounds accounting across the branching field sequence
// - Conditional-field desync (tile offset, dirty rect)
// - Guard-before-allocate ordering (output length, payload length)
// - Dispatch argument assembly (absent optionals, view lengths)

static INIT: Once = Once::new();

/// Stands in for the external raster routine. Touches every parameter so
/// the dispatch path stays honest under optimization, but renders nothing.
struct NoopCallback;

impl RasterCallback for NoopCallback {
    fn rasterize(&mut self, call: RasterCall<'_>) {
        let _ = (
            call.format,
            call.render_rect.min,
            call.visible_rect.max,
            call.tile_size,
        );
        let _ = (call.tile_offset, call.dirty_rect, call.payload.last());
        // The output view must be writable for its full declared length.
        if let Some(last) = call.output.last_mut() {
            *last = 0xAA;
        }
    }
}

fuzz_target!(|data: &[u8]| {
    INIT.call_once(init);
    let _ = run_iteration(data, &mut NoopCallback);
});
