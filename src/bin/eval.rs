//! prngbb-eval: read a region written by prngbb-fill back and report what survived.

use clap::Parser;
use prngbb_rs::consts::{DEFAULT_EVAL_LENGTH, DEFAULT_SEED};
use prngbb_rs::utils::{format_size, init_logging, parse_byte_size};
use prngbb_rs::{derive_key_from_str, evaluate_region, Finding, PrngbbError};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Parser)]
#[command(name = "prngbb-eval", about = "Evaluate bounded-buffer crypto device.")]
struct Cli {
    /// Offset to seek to
    #[arg(short, long, value_name = "bytes", default_value = "0", value_parser = byte_size)]
    offset: u64,
    /// Length of buffer
    #[arg(short, long, value_name = "bytes", default_value_t = DEFAULT_EVAL_LENGTH, value_parser = byte_size)]
    length: u64,
    /// PRNG seed
    #[arg(short, long, default_value = DEFAULT_SEED)]
    seed: String,
    /// Increases verbosity. Can be specified multiple times
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Device that was written to
    dev: PathBuf,
}

fn byte_size(s: &str) -> Result<u64, String> {
    parse_byte_size(s).map_err(|e| e.to_string())
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {e}", cli.dev.display());
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), PrngbbError> {
    let key = derive_key_from_str(&cli.seed);
    if cli.verbose >= 1 {
        println!(
            "Offset {:#x}, length {:#x} ({}), key {}",
            cli.offset,
            cli.length,
            format_size(cli.length),
            hex::encode(key.expose_secret())
        );
    }

    let reader = BufReader::new(File::open(&cli.dev)?);
    let evaluation = evaluate_region(reader, &key, cli.offset, cli.length)?;

    for finding in &evaluation.findings {
        match *finding {
            Finding::Invalid {
                offset,
                alignment,
                leading,
            } => {
                if leading || cli.verbose >= 2 {
                    println!("Invalid block at {offset:#x} (alignment {alignment} bytes)");
                }
            }
            Finding::Initial { counter, .. } => println!("Initial block ID: {counter}"),
            Finding::Discontinuity {
                offset,
                alignment,
                previous,
                current,
                gap_bytes,
                wraparound,
            } => {
                if !wraparound || cli.verbose >= 2 {
                    println!(
                        "Discontinuity at {offset:#x} (alignment {alignment} bytes), previous count {previous} followed by {current}, gap {gap_bytes} bytes = {} MiB",
                        gap_bytes / 1024 / 1024
                    );
                }
                if wraparound {
                    println!("Expected wraparound at {offset:#x} (alignment {alignment} bytes)");
                }
            }
        }
    }

    println!("{} invalid blocks found.", evaluation.invalid_blocks);
    Ok(())
}
