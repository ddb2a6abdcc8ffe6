#![warn(clippy::pedantic)]

pub mod decode;
pub mod dispatch;
pub mod error;
pub mod ffi;
pub mod iteration;

pub use decode::{MAX_OUTPUT_LEN, MAX_PAYLOAD_LEN, decode_request};
pub use dispatch::{RasterCall, RasterCallback, dispatch};
pub use error::DecodeError;
pub use ffi::{ExternCallback, RawRasterFn, RawRect, RawTileOffset};
pub use iteration::{Iteration, init, run_iteration};
