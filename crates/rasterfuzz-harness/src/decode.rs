use std::num::NonZeroU16;

use rasterfuzz_reader::ByteCursor;
use rasterfuzz_request::{ImageFormat, IntRect, RenderRequest, TileOffset, Tiling};

use crate::error::DecodeError;

/// Cap on the declared output-buffer length. Values at or above this are
/// rejected before any allocation.
pub const MAX_OUTPUT_LEN: u32 = 10 * 1024 * 1024;

/// Cap on the trailing payload length, same threshold and policy.
pub const MAX_PAYLOAD_LEN: usize = 10 * 1024 * 1024;

/// Decode one raw input buffer into a [`RenderRequest`].
///
/// The field sequence is fixed, but two later fields are conditional on
/// the *value* (not the presence) of an earlier scalar: a nonzero tile
/// size pulls in an 8-byte tile offset, and a nonzero flag byte pulls in
/// a 16-byte dirty rect. Consuming the wrong number of bytes at either
/// branch would desynchronize every following field, so the branches
/// mirror the wire exactly.
///
/// This function performs **zero allocation**. The returned request's
/// payload borrows the unconsumed tail of `input`; the two allocations a
/// dispatch needs happen in [`dispatch`](crate::dispatch) only after
/// both size guards have passed here. Reordering that would reintroduce
/// the resource-exhaustion hazard the guards exist to prevent.
///
/// No semantic validation is applied to rectangles: inverted and
/// degenerate rects decode cleanly and are forwarded to the callback,
/// which must defend itself.
///
/// # Errors
///
/// - [`DecodeError::Truncated`] if the input ends mid-field.
/// - [`DecodeError::OutputTooLarge`] if the declared output length is
///   ≥ [`MAX_OUTPUT_LEN`].
/// - [`DecodeError::PayloadTooLarge`] if the remaining payload is
///   ≥ [`MAX_PAYLOAD_LEN`].
pub fn decode_request(input: &[u8]) -> Result<RenderRequest<'_>, DecodeError> {
    let mut cursor = ByteCursor::new(input);

    let format = ImageFormat::from_wire_byte(cursor.read_u8()?);
    let render_rect = IntRect::read_from(&mut cursor)?;
    let visible_rect = IntRect::read_from(&mut cursor)?;

    // Tile size is the presence discriminant for the offset: zero means
    // no tiling and no offset bytes on the wire at all.
    let tiling = match NonZeroU16::new(cursor.read_u16()?) {
        Some(size) => Some(Tiling {
            size,
            offset: TileOffset::read_from(&mut cursor)?,
        }),
        None => None,
    };

    // Any nonzero flag byte means a dirty rect follows.
    let dirty_rect = if cursor.read_u8()? != 0 {
        Some(IntRect::read_from(&mut cursor)?)
    } else {
        None
    };

    let output_len = cursor.read_u32()?;
    if output_len >= MAX_OUTPUT_LEN {
        return Err(DecodeError::OutputTooLarge {
            declared: output_len,
            limit: MAX_OUTPUT_LEN,
        });
    }

    let payload_len = cursor.remaining();
    if payload_len >= MAX_PAYLOAD_LEN {
        return Err(DecodeError::PayloadTooLarge {
            actual: payload_len,
            limit: MAX_PAYLOAD_LEN,
        });
    }

    // Final operation of every decode: capture the unconsumed tail.
    let payload = cursor.rest();

    Ok(RenderRequest {
        format,
        render_rect,
        visible_rect,
        tiling,
        dirty_rect,
        output_len,
        payload,
    })
}
