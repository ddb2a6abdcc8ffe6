/// Implementation of `rasterfuzz replay`.
///
/// Feeds a corpus file to the exact pipeline the fuzz target runs, with
/// a callback that prints the call it receives. The command mirrors the
/// harness contract: a rejected input prints the rejection and exits 0,
/// because rejection is an ordinary outcome, not a fault. Only I/O
/// failures are errors.
use std::fs;

use anyhow::{Context, Result};
use rasterfuzz_harness::{Iteration, RasterCall, RasterCallback, run_iteration};

use crate::ReplayArgs;

/// Prints each dispatch it receives, standing in for the real renderer.
struct PrintingCallback;

impl RasterCallback for PrintingCallback {
    fn rasterize(&mut self, call: RasterCall<'_>) {
        println!("dispatch:");
        println!("  format       {:?}", call.format);
        println!(
            "  render rect  min=({}, {}) max=({}, {})",
            call.render_rect.min.x,
            call.render_rect.min.y,
            call.render_rect.max.x,
            call.render_rect.max.y
        );
        println!(
            "  visible rect min=({}, {}) max=({}, {})",
            call.visible_rect.min.x,
            call.visible_rect.min.y,
            call.visible_rect.max.x,
            call.visible_rect.max.y
        );
        match call.tile_offset {
            Some(offset) => println!(
                "  tiling       size={} offset=({}, {})",
                call.tile_size, offset.x, offset.y
            ),
            None => println!("  tiling       absent"),
        }
        match call.dirty_rect {
            Some(rect) => println!(
                "  dirty rect   min=({}, {}) max=({}, {})",
                rect.min.x, rect.min.y, rect.max.x, rect.max.y
            ),
            None => println!("  dirty rect   absent"),
        }
        println!("  payload      {} bytes", call.payload.len());
        println!("  output       {} bytes", call.output.len());
    }
}

/// Run the `rasterfuzz replay` command.
///
/// # Errors
///
/// Returns an error only if the file cannot be read.
pub fn run(args: &ReplayArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    match run_iteration(&bytes, &mut PrintingCallback) {
        Iteration::Dispatched => println!("result: dispatched"),
        Iteration::Skipped => println!("result: skipped (input rejected by decode or guards)"),
    }

    Ok(())
}
