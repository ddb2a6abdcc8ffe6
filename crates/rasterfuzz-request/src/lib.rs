#![warn(clippy::pedantic)]

pub mod format;
pub mod geometry;
pub mod request;

pub use format::ImageFormat;
pub use geometry::{IntPoint, IntRect, TileOffset, Tiling};
pub use request::RenderRequest;
