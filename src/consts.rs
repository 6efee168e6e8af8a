//! # Constants
//!
//! Fixed sizes shared by the keystream generator, the writer and the evaluator.

/// Size of one keystream block in bytes (one AES block).
pub const BLOCK_SIZE: usize = 16;

/// Size of the derived key in bytes (AES-128).
pub const KEY_SIZE: usize = 16;

/// Bytes per kibibyte. `buffer_size` on the command line is given in KiB.
pub const KIB: u64 = 1024;

/// Bytes per mebibyte, used for operator reporting only.
pub const MIB: u64 = KIB * 1024;

/// Seed used by the evaluator when none is given.
pub const DEFAULT_SEED: &str = "0";

/// Region length assumed by the evaluator when none is given (1 MiB).
pub const DEFAULT_EVAL_LENGTH: u64 = MIB;
