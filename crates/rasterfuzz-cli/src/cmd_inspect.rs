/// Implementation of `rasterfuzz inspect`.
///
/// Decodes a corpus file with the same pipeline the harness uses and
/// prints every field of the resulting request. Example output:
///
/// ```text
/// File: corpus/seed-basic (72 bytes)
/// Format:       Rgba8 (0x08)
/// Render rect:  min=(0, 0) max=(100, 100)
/// Visible rect: min=(0, 0) max=(50, 50)
/// Tiling:       absent
/// Dirty rect:   absent
/// Output len:   16
/// Payload:      32 bytes
///   0000: de ad be ef ...
/// ```
use std::fs;

use anyhow::{Context, Result};
use rasterfuzz_harness::decode_request;
use rasterfuzz_request::{IntRect, RenderRequest};
use serde_json::json;

use crate::InspectArgs;

/// Run the `rasterfuzz inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode (a
/// corpus entry the harness would reject has nothing to inspect).
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let request = decode_request(&bytes)
        .with_context(|| format!("{} does not decode to a request", args.file.display()))?;

    if args.json {
        print_json(&request);
    } else {
        print_text(args, &bytes, &request);
    }

    Ok(())
}

fn print_text(args: &InspectArgs, bytes: &[u8], request: &RenderRequest<'_>) {
    println!("File: {} ({} bytes)", args.file.display(), bytes.len());
    println!(
        "Format:       {:?} (0x{:02X})",
        request.format,
        request.format.to_wire_byte()
    );
    println!("Render rect:  {}", rect_label(&request.render_rect));
    println!("Visible rect: {}", rect_label(&request.visible_rect));

    match &request.tiling {
        Some(tiling) => println!(
            "Tiling:       size={} offset=({}, {})",
            tiling.size, tiling.offset.x, tiling.offset.y
        ),
        None => println!("Tiling:       absent"),
    }

    match &request.dirty_rect {
        Some(rect) => println!("Dirty rect:   {}", rect_label(rect)),
        None => println!("Dirty rect:   absent"),
    }

    println!("Output len:   {}", request.output_len);
    println!("Payload:      {} bytes", request.payload.len());

    let preview_len = request.payload.len().min(args.payload_preview);
    for (row, chunk) in request.payload[..preview_len].chunks(16).enumerate() {
        let hex_row: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        println!("  {:04x}: {}", row * 16, hex_row.join(" "));
    }
    if request.payload.len() > preview_len {
        println!("  ... {} more bytes", request.payload.len() - preview_len);
    }
}

fn print_json(request: &RenderRequest<'_>) {
    let summary = json!({
        "format": request.format.to_wire_byte(),
        "render_rect": rect_array(&request.render_rect),
        "visible_rect": rect_array(&request.visible_rect),
        "tile": request.tiling.map(|t| {
            json!({ "size": t.size.get(), "offset": [t.offset.x, t.offset.y] })
        }),
        "dirty_rect": request.dirty_rect.as_ref().map(rect_array),
        "output_len": request.output_len,
        "payload_len": request.payload.len(),
        "payload_hex": hex::encode(request.payload),
    });
    println!("{summary:#}");
}

fn rect_label(rect: &IntRect) -> String {
    format!(
        "min=({}, {}) max=({}, {})",
        rect.min.x, rect.min.y, rect.max.x, rect.max.y
    )
}

fn rect_array(rect: &IntRect) -> serde_json::Value {
    json!([rect.min.x, rect.min.y, rect.max.x, rect.max.y])
}
