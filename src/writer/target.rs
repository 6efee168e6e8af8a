//! src/writer/target.rs
//! The storage a writer overwrites: positioned writes plus a durability barrier.

use std::fs::{File, OpenOptions};
use std::io::{self, Cursor, Seek, Write};
use std::path::Path;

/// A seekable sink that can force its pending writes onto stable storage.
///
/// `barrier` must block until everything written so far is persistent.
pub trait DurableTarget: Write + Seek {
    fn barrier(&mut self) -> io::Result<()>;
}

impl DurableTarget for File {
    #[inline]
    fn barrier(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

/// In-memory targets have nothing to flush.
impl DurableTarget for Cursor<Vec<u8>> {
    #[inline]
    fn barrier(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl DurableTarget for Cursor<&mut [u8]> {
    #[inline]
    fn barrier(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: DurableTarget + ?Sized> DurableTarget for &mut T {
    #[inline]
    fn barrier(&mut self) -> io::Result<()> {
        (**self).barrier()
    }
}

/// Open an existing file or block device write-only, without creating or
/// truncating it.
pub fn open_target<P: AsRef<Path>>(path: P) -> io::Result<File> {
    OpenOptions::new().write(true).open(path)
}
