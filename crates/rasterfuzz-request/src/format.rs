/// Pixel format tag for a render request.
///
/// One wire byte. Every byte value is a legal decode: tags outside the
/// known set are preserved as [`ImageFormat::Unrecognized`] and forwarded
/// to the raster callback untouched. The callback's handling of a bogus
/// format tag is part of the surface under test, so the harness never
/// filters here.
///
/// ```text
/// ┌──────┬──────────────┐
/// │ Wire │ Format       │
/// ├──────┼──────────────┤
/// │ 0x01 │ R8           │
/// │ 0x02 │ R16          │
/// │ 0x03 │ Bgra8        │
/// │ 0x04 │ RgbaF32      │
/// │ 0x05 │ Rg8          │
/// │ 0x06 │ Rg16         │
/// │ 0x07 │ RgbaI32      │
/// │ 0x08 │ Rgba8        │
/// │ else │ Unrecognized │
/// └──────┴──────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    R8,
    R16,
    Bgra8,
    RgbaF32,
    Rg8,
    Rg16,
    RgbaI32,
    Rgba8,
    /// A tag byte outside the known set, preserved verbatim.
    Unrecognized(u8),
}

impl ImageFormat {
    /// Decode a wire byte. Total: every byte maps to a variant.
    #[must_use]
    pub fn from_wire_byte(value: u8) -> Self {
        match value {
            0x01 => Self::R8,
            0x02 => Self::R16,
            0x03 => Self::Bgra8,
            0x04 => Self::RgbaF32,
            0x05 => Self::Rg8,
            0x06 => Self::Rg16,
            0x07 => Self::RgbaI32,
            0x08 => Self::Rgba8,
            other => Self::Unrecognized(other),
        }
    }

    /// Encode this variant as its wire byte.
    #[must_use]
    pub fn to_wire_byte(self) -> u8 {
        match self {
            Self::R8 => 0x01,
            Self::R16 => 0x02,
            Self::Bgra8 => 0x03,
            Self::RgbaF32 => 0x04,
            Self::Rg8 => 0x05,
            Self::Rg16 => 0x06,
            Self::RgbaI32 => 0x07,
            Self::Rgba8 => 0x08,
            Self::Unrecognized(raw) => raw,
        }
    }
}
