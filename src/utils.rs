// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library and the binaries.

use crate::consts::{KIB, MIB};
use crate::error::PrngbbError;

/// Largest power of two that divides `offset`.
///
/// Offset zero is divisible by every power of two; it reports `1 << 63`.
#[inline]
pub const fn alignment_of(offset: u64) -> u64 {
    if offset == 0 {
        1 << 63
    } else {
        offset & offset.wrapping_neg()
    }
}

/// Parses a byte count such as `4096`, `0x1000`, `4 Ki`, `1Mi` or `2 G`.
///
/// Binary suffixes (`Ki`, `Mi`, `Gi`, `Ti`) multiply by powers of 1024, decimal
/// ones (`k`, `M`, `G`, `T`) by powers of 1000. Whitespace between the number
/// and the suffix is allowed.
pub fn parse_byte_size(input: &str) -> Result<u64, PrngbbError> {
    let text = input.trim();
    let (radix, body) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(rest) => (16, rest),
        None => (10, text),
    };
    let digits_end = body.find(|c: char| !c.is_digit(radix)).unwrap_or(body.len());
    let (digits, unit) = body.split_at(digits_end);

    let value = u64::from_str_radix(digits, radix)
        .map_err(|e| PrngbbError::Config(format!("invalid size {input:?}: {e}")))?;

    let multiplier: u64 = match unit.trim() {
        "" => 1,
        "Ki" => KIB,
        "Mi" => MIB,
        "Gi" => MIB * KIB,
        "Ti" => MIB * MIB,
        "k" => 1_000,
        "M" => 1_000_000,
        "G" => 1_000_000_000,
        "T" => 1_000_000_000_000,
        other => {
            return Err(PrngbbError::Config(format!(
                "invalid size {input:?}: unknown unit {other:?}"
            )))
        }
    };

    value
        .checked_mul(multiplier)
        .ok_or_else(|| PrngbbError::Config(format!("invalid size {input:?}: overflows")))
}

/// Human-readable size used in operator output.
pub fn format_size(bytes: u64) -> String {
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MiB", bytes / MIB)
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{} KiB", bytes / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Install the fmt subscriber used by both binaries.
///
/// `RUST_LOG` overrides the default `info` level. Calling this twice is a no-op.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
