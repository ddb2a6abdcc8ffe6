use crate::format::ImageFormat;
use crate::geometry::{IntRect, Tiling};

/// Fully decoded parameter set for one raster dispatch.
///
/// Built field-by-field from the wire, immutable once complete, and
/// consumed exactly once by the dispatcher. The payload borrows the
/// unconsumed tail of the input buffer; no copy is made until dispatch,
/// when the callback's calling convention requires an independently
/// owned buffer.
///
/// Both optional structures are genuine `Option`s, never sentinel
/// values: downstream, "absent" and "zero-valued" are distinguished
/// states, exactly as the wire format distinguishes them.
///
/// Wire layout (all integers little-endian):
///
/// ```text
/// ┌──────────────┬────────────────────────────────────────────────┐
/// │ 1 byte       │ format tag (any value legal)                   │
/// │ 16 bytes     │ render rect: min.x min.y max.x max.y (i32)     │
/// │ 16 bytes     │ visible rect: same shape                       │
/// │ 2 bytes      │ tile size (u16)                                │
/// │ 0 or 8 bytes │ tile offset x, y (i32), iff tile size ≠ 0      │
/// │ 1 byte       │ dirty-rect flag                                │
/// │ 0 or 16 bytes│ dirty rect (4 × i32), iff flag ≠ 0             │
/// │ 4 bytes      │ output length (u32)                            │
/// │ rest         │ payload                                        │
/// └──────────────┴────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest<'a> {
    pub format: ImageFormat,
    pub render_rect: IntRect,
    pub visible_rect: IntRect,
    /// `None` iff the wire tile-size field was 0.
    pub tiling: Option<Tiling>,
    /// `None` iff the wire flag byte was 0.
    pub dirty_rect: Option<IntRect>,
    /// Declared length of the output buffer the callback writes into.
    pub output_len: u32,
    /// Encoded image payload: every input byte after the fixed fields.
    pub payload: &'a [u8],
}

impl RenderRequest<'_> {
    /// Exact size of this request's wire encoding in bytes.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        1 + 16
            + 16
            + 2
            + if self.tiling.is_some() { 8 } else { 0 }
            + 1
            + if self.dirty_rect.is_some() { 16 } else { 0 }
            + 4
            + self.payload.len()
    }

    /// Append the wire encoding to `buf`.
    ///
    /// This is the exact inverse of the decode pipeline and is what the
    /// seed tooling uses to produce well-formed corpus entries. For any
    /// representable request, decoding the output reproduces the request
    /// byte-for-byte and field-for-field.
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        buf.push(self.format.to_wire_byte());
        self.render_rect.write_to(buf);
        self.visible_rect.write_to(buf);

        match self.tiling {
            Some(tiling) => {
                buf.extend_from_slice(&tiling.size.get().to_le_bytes());
                tiling.offset.write_to(buf);
            }
            None => buf.extend_from_slice(&0u16.to_le_bytes()),
        }

        match self.dirty_rect {
            Some(rect) => {
                buf.push(1);
                rect.write_to(buf);
            }
            None => buf.push(0),
        }

        buf.extend_from_slice(&self.output_len.to_le_bytes());
        buf.extend_from_slice(self.payload);
    }

    /// The wire encoding as a fresh buffer.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut buf);
        buf
    }
}
