// src/writer/mod.rs

//! Bounded-buffer writer facade.
//!
//! Core API: `BoundedBufferWriter::new(target, config, keystream).run(&stop)?`.
//! `RegionConfig` validates the geometry up front; `DurableTarget` is the seam
//! between the loop and the storage it flushes.

pub(crate) mod config;
pub(crate) mod pass;
pub(crate) mod target;

pub use config::RegionConfig;
pub use pass::{BoundedBufferWriter, PassReport};
pub use target::{open_target, DurableTarget};
