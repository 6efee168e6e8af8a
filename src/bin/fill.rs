//! prngbb-fill: overwrite a region with AES-ECB counter keystream, fsync after every pass.
//!
//! Runs until killed (or until `--passes` is reached). Any write or barrier
//! failure aborts the process; nothing is retried.

use clap::{CommandFactory, Parser};
use prngbb_rs::consts::{BLOCK_SIZE, KIB, MIB};
use prngbb_rs::utils::init_logging;
use prngbb_rs::{
    derive_key_from_str, open_target, BoundedBufferWriter, Keystream, PrngbbError, RegionConfig,
};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::AtomicBool;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "prngbb-fill",
    about = "PRNG bounded buffer writes for persistence atomicity analysis",
    after_help = "Example: prngbb-fill /dev/zero 0 256 0 40960"
)]
struct Cli {
    /// Target file or block device (must exist and be writable)
    filename: PathBuf,
    /// Seed the keystream key is derived from
    seed: String,
    /// AES blocks per write() call
    chunk_blocks: usize,
    /// Byte offset at which the region starts
    offset: u64,
    /// Region size in KiB
    bufsize_kib: u64,
    /// Stop cleanly after this many passes instead of running forever
    #[arg(long, value_name = "N")]
    passes: Option<u64>,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let config = match RegionConfig::from_kib(cli.chunk_blocks, cli.offset, cli.bufsize_kib) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    info!(
        "Offset {} bytes, bufsize {} bytes ({} kiB / {} MiB).",
        config.offset(),
        config.buffer_size(),
        config.buffer_size() / KIB,
        config.buffer_size() / MIB
    );
    info!(
        "Executing a write() every {} AES blocks ({} bytes)",
        config.chunk_blocks(),
        config.chunk_blocks() * BLOCK_SIZE
    );

    let key = derive_key_from_str(&cli.seed);
    info!(
        "Seed '{}' derived key: {}",
        cli.seed,
        hex::encode(key.expose_secret())
    );

    let file = match open_target(&cli.filename) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("{}: {e}", cli.filename.display());
            process::exit(1);
        }
    };

    let mut writer = BoundedBufferWriter::new(file, config, Keystream::new(&key));
    let result = match cli.passes {
        Some(count) => writer.run_passes(count),
        None => {
            let stop = AtomicBool::new(false);
            writer.run(&stop).map(|_| ())
        }
    };

    if let Err(e) = result {
        fail(e);
    }
    info!(passes = writer.passes_completed(), "done");
}

fn fail(e: PrngbbError) -> ! {
    if e.is_config() {
        eprintln!("Fatal: {e}");
        eprintln!("{}", Cli::command().render_usage());
        process::exit(1);
    }

    error!("{e}");
    eprintln!("Failed: {e}");
    if e.is_fatal_abort() {
        process::abort();
    }
    process::exit(1);
}
