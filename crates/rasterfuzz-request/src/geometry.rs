use std::num::NonZeroU16;

use rasterfuzz_reader::{ByteCursor, ReadError};

/// Signed 2-D point. Each axis is one `i32` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    /// Read an `x, y` pair from the cursor.
    ///
    /// # Errors
    ///
    /// Propagates [`ReadError::Truncated`] from either read.
    pub fn read_from(cursor: &mut ByteCursor<'_>) -> Result<Self, ReadError> {
        Ok(Self {
            x: cursor.read_i32()?,
            y: cursor.read_i32()?,
        })
    }

    /// Append the wire encoding (8 bytes, little-endian) to `buf`.
    pub fn write_to(self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.x.to_le_bytes());
        buf.extend_from_slice(&self.y.to_le_bytes());
    }
}

/// Axis-aligned integer rectangle.
///
/// No ordering relationship between `min` and `max` is enforced anywhere:
/// an inverted or degenerate rectangle (`max < min`) is a representable
/// value and decodes cleanly. The raster callback is expected to defend
/// against such rectangles itself, and stressing that defense is exactly
/// what the harness is for.
///
/// Wire layout: `min.x, min.y, max.x, max.y`, each an `i32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntRect {
    pub min: IntPoint,
    pub max: IntPoint,
}

impl IntRect {
    /// Read the four coordinates in wire order.
    ///
    /// # Errors
    ///
    /// Propagates [`ReadError::Truncated`] from any of the four reads.
    pub fn read_from(cursor: &mut ByteCursor<'_>) -> Result<Self, ReadError> {
        Ok(Self {
            min: IntPoint::read_from(cursor)?,
            max: IntPoint::read_from(cursor)?,
        })
    }

    /// Append the wire encoding (16 bytes) to `buf`.
    pub fn write_to(self, buf: &mut Vec<u8>) {
        self.min.write_to(buf);
        self.max.write_to(buf);
    }
}

/// Tile coordinate within a tiled rendering job.
///
/// Distinct from [`IntPoint`]: an offset counts tiles, not pixels, and
/// only exists on the wire when the preceding tile size is nonzero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileOffset {
    pub x: i32,
    pub y: i32,
}

impl TileOffset {
    /// Read an `x, y` pair from the cursor.
    ///
    /// # Errors
    ///
    /// Propagates [`ReadError::Truncated`] from either read.
    pub fn read_from(cursor: &mut ByteCursor<'_>) -> Result<Self, ReadError> {
        Ok(Self {
            x: cursor.read_i32()?,
            y: cursor.read_i32()?,
        })
    }

    /// Append the wire encoding (8 bytes) to `buf`.
    pub fn write_to(self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.x.to_le_bytes());
        buf.extend_from_slice(&self.y.to_le_bytes());
    }
}

/// Tiling parameters, present iff the wire tile-size field is nonzero.
///
/// The size doubles as the presence discriminant on the wire, which is
/// why it is a `NonZeroU16` here: `Option<Tiling>` then has exactly one
/// representation per wire state, and a "tiling present with size 0"
/// value cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tiling {
    pub size: NonZeroU16,
    pub offset: TileOffset,
}
