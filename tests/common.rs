//! tests/common.rs
//! Shared constants and an instrumented in-memory target.

#![allow(dead_code)] // Used across multiple test files

use prngbb_rs::DurableTarget;
use std::io::{self, Seek, SeekFrom, Write};

/// Seed used by the reference scenario.
pub const TEST_SEED: &str = "0";

/// MD5("0")
pub const TEST_SEED_KEY_HEX: &str = "cfcd208495d565ef66e7dff9f98764da";

/// Everything the writer asked the target to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Seek(u64),
    Write { position: u64, len: usize },
    Barrier,
}

/// How the target misbehaves, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fault {
    #[default]
    None,
    /// Accept only half of the n-th write call (0-based).
    ShortWriteAt(usize),
    /// Fail the n-th write call (0-based).
    WriteErrorAt(usize),
    /// Fail every barrier.
    Barrier,
    /// Report a position other than the one requested.
    SeekDrift,
}

/// In-memory target that records every call and can inject faults.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub data: Vec<u8>,
    pub position: u64,
    pub events: Vec<Event>,
    pub fault: Fault,
    writes: usize,
}

impl RecordingTarget {
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0u8; size],
            ..Default::default()
        }
    }

    pub fn with_fault(size: usize, fault: Fault) -> Self {
        Self {
            fault,
            ..Self::new(size)
        }
    }

    pub fn writes(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Write { position, len } => Some((*position, *len)),
            _ => None,
        })
    }

    pub fn barriers(&self) -> usize {
        self.events.iter().filter(|e| **e == Event::Barrier).count()
    }
}

impl Write for RecordingTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let call = self.writes;
        self.writes += 1;

        let len = match self.fault {
            Fault::WriteErrorAt(n) if n == call => {
                return Err(io::Error::new(io::ErrorKind::Other, "injected write error"))
            }
            Fault::ShortWriteAt(n) if n == call => buf.len() / 2,
            _ => buf.len(),
        };

        let start = self.position as usize;
        let end = start + len;
        if self.data.len() < end {
            self.data.resize(end, 0);
        }
        self.data[start..end].copy_from_slice(&buf[..len]);
        self.events.push(Event::Write {
            position: self.position,
            len,
        });
        self.position += len as u64;
        Ok(len)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for RecordingTarget {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(p) => p,
            _ => return Err(io::Error::new(io::ErrorKind::Unsupported, "only absolute seeks")),
        };
        self.position = if self.fault == Fault::SeekDrift {
            target + 1
        } else {
            target
        };
        self.events.push(Event::Seek(target));
        Ok(self.position)
    }
}

impl DurableTarget for RecordingTarget {
    fn barrier(&mut self) -> io::Result<()> {
        if self.fault == Fault::Barrier {
            return Err(io::Error::new(io::ErrorKind::Other, "injected fsync error"));
        }
        self.events.push(Event::Barrier);
        Ok(())
    }
}
