//! src/writer/pass.rs
//! Bounded-buffer write loop: SEEK → WRITE_CHUNK × block_count → BARRIER, forever.

use crate::crypto::keystream::Keystream;
use crate::error::PrngbbError;
use crate::writer::config::RegionConfig;
use crate::writer::target::DurableTarget;
use std::io::SeekFrom;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// What one completed pass did. Returned after its barrier has succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    /// 1-based pass number.
    pub pass: u64,
    /// Counter of the first block written in this pass.
    pub first_counter: u64,
    /// Counter of the last block written in this pass.
    pub last_counter: u64,
    /// Number of write calls issued.
    pub writes: u64,
    /// Bytes written, always equal to the region size.
    pub bytes: u64,
    /// Wall-clock time from the seek to the end of the barrier.
    pub elapsed: Duration,
}

/// Drives passes over a region of `target`, pulling blocks from `keystream`.
///
/// The writer owns the target and the generator for its whole lifetime; the
/// counter therefore continues across passes and is never rewound.
pub struct BoundedBufferWriter<T: DurableTarget> {
    target: T,
    config: RegionConfig,
    keystream: Keystream,
    chunk: Vec<u8>,
    passes_completed: u64,
    started: Instant,
    first_chunk_elapsed: Option<Duration>,
}

impl<T: DurableTarget> BoundedBufferWriter<T> {
    pub fn new(target: T, config: RegionConfig, keystream: Keystream) -> Self {
        Self {
            target,
            chunk: vec![0u8; config.chunk_size()],
            config,
            keystream,
            passes_completed: 0,
            started: Instant::now(),
            first_chunk_elapsed: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &RegionConfig {
        &self.config
    }

    #[inline]
    pub fn passes_completed(&self) -> u64 {
        self.passes_completed
    }

    /// Counter of the last block handed to the target.
    #[inline]
    pub fn counter(&self) -> u64 {
        self.keystream.counter()
    }

    /// Time from construction until the first chunk write returned.
    #[inline]
    pub fn first_chunk_elapsed(&self) -> Option<Duration> {
        self.first_chunk_elapsed
    }

    /// Give the target back, e.g. to inspect an in-memory buffer.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Run exactly one pass including its barrier.
    ///
    /// Any error leaves the region in whatever state the failed call left it;
    /// the caller is expected to stop.
    pub fn run_pass(&mut self) -> Result<PassReport, PrngbbError> {
        let pass_started = Instant::now();
        let offset = self.config.offset();

        let position = self
            .target
            .seek(SeekFrom::Start(offset))
            .map_err(|e| PrngbbError::Seek {
                offset,
                reason: e.to_string(),
            })?;
        if position != offset {
            return Err(PrngbbError::Seek {
                offset,
                reason: format!("landed at {position}"),
            });
        }

        let first_counter = self.keystream.counter() + 1;
        let block_count = self.config.block_count();

        for slot in 0..block_count {
            self.keystream.fill_chunk(&mut self.chunk)?;
            self.write_chunk()?;
            trace!(slot, counter = self.keystream.counter(), "chunk written");

            if self.first_chunk_elapsed.is_none() {
                let elapsed = self.started.elapsed();
                self.first_chunk_elapsed = Some(elapsed);
                info!("First chunk written in {:.3} sec", elapsed.as_secs_f64());
            }
        }

        self.target.barrier().map_err(PrngbbError::Barrier)?;
        self.passes_completed += 1;

        let report = PassReport {
            pass: self.passes_completed,
            first_counter,
            last_counter: self.keystream.counter(),
            writes: block_count,
            bytes: self.config.buffer_size(),
            elapsed: pass_started.elapsed(),
        };
        info!(
            "Iteration #{} sync ({:.3} sec).",
            report.pass,
            report.elapsed.as_secs_f64()
        );
        debug!(
            first_counter = report.first_counter,
            last_counter = report.last_counter,
            "pass counters"
        );

        Ok(report)
    }

    /// Run passes until `stop` is observed set, returning the number of
    /// passes completed by this call.
    ///
    /// `stop` is only checked after a barrier has returned, so a stop request
    /// never cuts a pass short of its barrier.
    pub fn run(&mut self, stop: &AtomicBool) -> Result<u64, PrngbbError> {
        let mut passes = 0;
        loop {
            self.run_pass()?;
            passes += 1;
            if stop.load(Ordering::Acquire) {
                info!(passes = self.passes_completed, "stop requested, leaving after barrier");
                return Ok(passes);
            }
        }
    }

    /// Run exactly `count` passes.
    pub fn run_passes(&mut self, count: u64) -> Result<(), PrngbbError> {
        for _ in 0..count {
            self.run_pass()?;
        }
        Ok(())
    }

    /// One write call for the whole chunk. Partial transfers are not resumed.
    fn write_chunk(&mut self) -> Result<(), PrngbbError> {
        let expected = self.chunk.len();
        let written = self.target.write(&self.chunk).map_err(PrngbbError::Write)?;
        if written != expected {
            return Err(PrngbbError::ShortWrite { expected, written });
        }
        Ok(())
    }
}
