use crate::decode::decode_request;
use crate::dispatch::{RasterCallback, dispatch};

/// Outcome of one harness iteration.
///
/// Both values are "success" at the driver boundary: a skipped input is
/// an ordinary, expected result, not a fault. The distinction exists so
/// tests and the replay tool can observe what happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Iteration {
    /// The input decoded and the callback was invoked exactly once.
    Dispatched,
    /// Decoding aborted (truncated input or a size guard); nothing was
    /// invoked and nothing was allocated.
    Skipped,
}

/// Once-per-process bootstrap hook.
///
/// The driver contract calls for a no-argument, no-failure
/// initialization callback before any iterations; the fuzz targets wire
/// this through `std::sync::Once`. Nothing currently needs setup, so the
/// hook is empty. It exists so a real raster backend with process-level
/// state has a place to initialize without changing the targets.
pub fn init() {}

/// Run one complete iteration: decode, guard, and at most one dispatch.
///
/// Fail closed: any decode-level rejection returns
/// [`Iteration::Skipped`] with no side effect. This function itself
/// never fails; the only faults that can escape are raised *inside*
/// the callback, and those propagate unmodified so the driver's
/// crash detection can pair them with the exact input bytes.
///
/// No state persists across iterations.
pub fn run_iteration(data: &[u8], callback: &mut impl RasterCallback) -> Iteration {
    match decode_request(data) {
        Ok(request) => {
            tracing::trace!(
                payload_len = request.payload.len(),
                output_len = request.output_len,
                tiled = request.tiling.is_some(),
                "dispatching decoded request"
            );
            dispatch(&request, callback);
            Iteration::Dispatched
        }
        Err(reason) => {
            tracing::trace!(%reason, "input rejected");
            Iteration::Skipped
        }
    }
}
