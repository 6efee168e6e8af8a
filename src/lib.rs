// src/lib.rs

pub mod aliases;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod evaluator;
pub mod utils;
pub mod writer;

// High-level API
pub use crypto::kdf::{derive_key, derive_key_from_str};
pub use crypto::keystream::{Keystream, KeystreamDecoder};
pub use error::PrngbbError;
pub use evaluator::{evaluate_region, Finding, RegionEvaluation};
pub use writer::{open_target, BoundedBufferWriter, DurableTarget, PassReport, RegionConfig};
