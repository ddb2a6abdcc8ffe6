#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;

pub use cursor::ByteCursor;
pub use error::ReadError;
