/// Implementation of `rasterfuzz seed`.
///
/// Parses a JSON manifest describing one render request, encodes it with
/// the wire writer, sanity-checks the result through the real decode
/// pipeline, and writes it out as a corpus file.
///
/// # Manifest format
///
/// ```json
/// {
///   "format": 2,
///   "render_rect": [0, 0, 100, 100],
///   "visible_rect": [0, 0, 50, 50],
///   "tile": { "size": 256, "offset": [0, 0] },
///   "dirty_rect": [0, 0, 100, 100],
///   "output_len": 16,
///   "payload_hex": "deadbeef"
/// }
/// ```
///
/// `tile`, `dirty_rect`, and `payload_hex` are optional; omitting them
/// encodes the corresponding absent state (`tile` with `"size": 0` is a
/// manifest error; absence is spelled by omission, matching how the
/// wire spells it).
use std::fs;
use std::num::NonZeroU16;

use anyhow::{Context, Result, bail};
use rasterfuzz_harness::decode_request;
use rasterfuzz_request::{
    ImageFormat, IntPoint, IntRect, RenderRequest, TileOffset, Tiling,
};
use serde::Deserialize;

use crate::SeedArgs;

#[derive(Deserialize)]
struct SeedManifest {
    format: u8,
    render_rect: [i32; 4],
    visible_rect: [i32; 4],
    #[serde(default)]
    tile: Option<TileManifest>,
    #[serde(default)]
    dirty_rect: Option<[i32; 4]>,
    output_len: u32,
    #[serde(default)]
    payload_hex: Option<String>,
}

#[derive(Deserialize)]
struct TileManifest {
    size: u16,
    offset: [i32; 2],
}

fn rect_from(coords: [i32; 4]) -> IntRect {
    IntRect {
        min: IntPoint {
            x: coords[0],
            y: coords[1],
        },
        max: IntPoint {
            x: coords[2],
            y: coords[3],
        },
    }
}

/// Run the `rasterfuzz seed` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or parsed, if it
/// describes an unrepresentable request (zero tile size, invalid hex),
/// or if the output file cannot be written. Also fails if the encoded
/// bytes do not survive the harness's own decode, which would mean a
/// seed the fuzzer cannot use.
pub fn run(args: &SeedArgs) -> Result<()> {
    let manifest_text = fs::read_to_string(&args.manifest)
        .with_context(|| format!("cannot read {}", args.manifest.display()))?;
    let manifest: SeedManifest = serde_json::from_str(&manifest_text)
        .with_context(|| format!("invalid manifest {}", args.manifest.display()))?;

    let payload = match &manifest.payload_hex {
        Some(text) => hex::decode(text).context("payload_hex is not valid hex")?,
        None => Vec::new(),
    };

    let tiling = match manifest.tile {
        Some(tile) => {
            let Some(size) = NonZeroU16::new(tile.size) else {
                bail!("tile.size must be nonzero; omit \"tile\" to encode no tiling");
            };
            Some(Tiling {
                size,
                offset: TileOffset {
                    x: tile.offset[0],
                    y: tile.offset[1],
                },
            })
        }
        None => None,
    };

    let request = RenderRequest {
        format: ImageFormat::from_wire_byte(manifest.format),
        render_rect: rect_from(manifest.render_rect),
        visible_rect: rect_from(manifest.visible_rect),
        tiling,
        dirty_rect: manifest.dirty_rect.map(rect_from),
        output_len: manifest.output_len,
        payload: &payload,
    };

    let bytes = request.to_bytes();

    // A seed the harness itself would reject is useless to the fuzzer;
    // catch that here rather than in the first campaign run.
    decode_request(&bytes)
        .context("encoded seed does not decode (manifest exceeds a size cap?)")?;

    fs::write(&args.output, &bytes)
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    println!(
        "wrote {} ({} bytes, {})",
        args.output.display(),
        bytes.len(),
        if request.tiling.is_some() {
            "tiled"
        } else {
            "untiled"
        }
    );

    Ok(())
}
