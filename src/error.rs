//! # Error Types
//!
//! All fallible operations return [`Result<T, PrngbbError>`](PrngbbError).
//! The binaries are the only place where an error turns into an exit status
//! or an abort; nothing in the library retries.

use std::io;
use thiserror::Error;

/// The error type for keystream generation, region writing and evaluation.
#[derive(Error, Debug)]
pub enum PrngbbError {
    /// I/O error outside the write loop (opening the target, reading it back).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration, detected before any I/O takes place.
    ///
    /// - `chunk_blocks` of zero
    /// - zero buffer size or one that is not a multiple of the chunk size
    /// - sizes that overflow when converted to bytes
    /// - malformed size literals
    #[error("Config error: {0}")]
    Config(String),

    /// The keystream primitive produced or was asked for output of the wrong
    /// shape. Indicates a broken backend, not a user error.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Seeking to the start of the region failed or landed elsewhere.
    #[error("seek to offset {offset} failed: {reason}")]
    Seek { offset: u64, reason: String },

    /// A chunk write returned an error.
    #[error("write failed: {0}")]
    Write(io::Error),

    /// A chunk write transferred fewer bytes than requested.
    #[error("short write: {written} of {expected} bytes")]
    ShortWrite { expected: usize, written: usize },

    /// The durability barrier after a pass failed.
    #[error("durability barrier failed: {0}")]
    Barrier(io::Error),
}

impl PrngbbError {
    /// Configuration errors are reported together with the usage text.
    pub fn is_config(&self) -> bool {
        matches!(self, PrngbbError::Config(_))
    }

    /// Failures inside the write loop and primitive failures end the process
    /// with an abort rather than a regular exit.
    pub fn is_fatal_abort(&self) -> bool {
        matches!(
            self,
            PrngbbError::Crypto(_)
                | PrngbbError::Write(_)
                | PrngbbError::ShortWrite { .. }
                | PrngbbError::Barrier(_)
        )
    }
}
