/// Corpus tooling for the rasterfuzz harness: inspect, replay, and seed
/// the byte-encoded render requests the fuzz targets consume.
///
/// # Command overview
///
/// ```text
/// rasterfuzz <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Decode a corpus file and print the request it encodes
///   replay     Run a corpus file through the full harness pipeline
///   seed       Build a well-formed corpus entry from a JSON manifest
///   help       Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                                      |
/// |------|--------------------------------------------------------------|
/// | 0    | Success (for `replay`, a rejected input is still success)    |
/// | 1    | Operational error (I/O failure, bad manifest, undecodable)   |
///
/// A rejected input is only an error for `inspect` (there is nothing to
/// show); `replay` mirrors the harness contract, where rejection is an
/// ordinary outcome.
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_inspect;
mod cmd_replay;
mod cmd_seed;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The rasterfuzz corpus tool.
#[derive(Parser)]
#[command(name = "rasterfuzz", version, about = "rasterfuzz corpus tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a corpus file and print the request it encodes.
    Inspect(InspectArgs),
    /// Run a corpus file through the full decode-guard-dispatch pipeline.
    Replay(ReplayArgs),
    /// Build a well-formed corpus entry from a JSON manifest.
    Seed(SeedArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `rasterfuzz inspect`.
///
/// Decodes the file exactly as the harness would and prints each field,
/// including which optional structures are present and a preview of the
/// payload bytes. Fails (exit 1) if the file does not decode, since an
/// undecodable corpus entry has nothing to show.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the corpus file to inspect.
    pub file: PathBuf,

    /// Emit a machine-readable JSON summary instead of text.
    #[arg(long)]
    pub json: bool,

    /// Number of payload bytes to show in the hex preview.
    #[arg(long, default_value_t = 32)]
    pub payload_preview: usize,
}

/// Arguments for `rasterfuzz replay`.
///
/// Runs the file through [`rasterfuzz_harness::run_iteration`] with a
/// callback that prints what it receives. Useful for reproducing a
/// crashing corpus entry under a debugger: the decode and dispatch paths
/// are byte-for-byte the ones the fuzz target exercises.
#[derive(clap::Args)]
pub struct ReplayArgs {
    /// Path to the corpus file to replay.
    pub file: PathBuf,
}

/// Arguments for `rasterfuzz seed`.
///
/// Reads a JSON manifest describing one render request and writes its
/// wire encoding, giving the fuzzer a dispatchable starting point (the
/// mandatory prefix alone is 40 bytes, a long way for a mutator to
/// stumble to from an empty corpus). The manifest format is:
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
/// `tile`, `dirty_rect`, and `payload_hex` may be omitted; the resulting
/// entry then encodes the corresponding absent state.
#[derive(clap::Args)]
pub struct SeedArgs {
    /// Path to the JSON manifest file.
    pub manifest: PathBuf,

    /// Output corpus file path.
    #[arg(short, long)]
    pub output: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Replay(args) => cmd_replay::run(&args),
        Commands::Seed(args) => cmd_seed::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
