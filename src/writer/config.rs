//! src/writer/config.rs
//! Region geometry, validated once before the target is touched.

use crate::consts::{BLOCK_SIZE, KIB};
use crate::error::PrngbbError;

/// Validated description of the region a writer overwrites.
///
/// Invariants upheld by every constructed value:
/// - `chunk_blocks >= 1`
/// - `buffer_size > 0`
/// - `buffer_size % (chunk_blocks * BLOCK_SIZE) == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionConfig {
    chunk_blocks: usize,
    offset: u64,
    buffer_size: u64,
}

impl RegionConfig {
    /// Build a configuration from a region size in bytes.
    pub fn new(chunk_blocks: usize, offset: u64, buffer_size: u64) -> Result<Self, PrngbbError> {
        if chunk_blocks < 1 {
            return Err(PrngbbError::Config("illegal chunk_blocks value".into()));
        }

        let chunk_size = chunk_blocks
            .checked_mul(BLOCK_SIZE)
            .and_then(|size| u64::try_from(size).ok())
            .ok_or_else(|| PrngbbError::Config("chunk size overflows".into()))?;

        if buffer_size == 0 {
            return Err(PrngbbError::Config("buffer size must be positive".into()));
        }
        if buffer_size % chunk_size != 0 {
            return Err(PrngbbError::Config(format!(
                "buffer size not a multiple of chunk size ({buffer_size} bytes vs. {chunk_size} bytes)"
            )));
        }
        if offset.checked_add(buffer_size).is_none() {
            return Err(PrngbbError::Config("region end overflows".into()));
        }

        Ok(Self {
            chunk_blocks,
            offset,
            buffer_size,
        })
    }

    /// Build a configuration from a region size in KiB, as given on the command line.
    pub fn from_kib(chunk_blocks: usize, offset: u64, buffer_kib: u64) -> Result<Self, PrngbbError> {
        let buffer_size = buffer_kib
            .checked_mul(KIB)
            .ok_or_else(|| PrngbbError::Config(format!("buffer size of {buffer_kib} KiB overflows")))?;
        Self::new(chunk_blocks, offset, buffer_size)
    }

    #[inline]
    pub fn chunk_blocks(&self) -> usize {
        self.chunk_blocks
    }

    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Region size in bytes.
    #[inline]
    pub fn buffer_size(&self) -> u64 {
        self.buffer_size
    }

    /// Bytes per write call.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_blocks * BLOCK_SIZE
    }

    /// Write calls per pass.
    #[inline]
    pub fn block_count(&self) -> u64 {
        self.buffer_size / self.chunk_size() as u64
    }

    /// Counter values consumed by one pass.
    #[inline]
    pub fn blocks_per_pass(&self) -> u64 {
        self.buffer_size / BLOCK_SIZE as u64
    }
}
