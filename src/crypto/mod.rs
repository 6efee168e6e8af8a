// src/crypto/mod.rs

//! Low-level primitives: seed-to-key derivation and the counter keystream.
//!
//! See crate root for re-exports (`derive_key`, `Keystream`).

pub mod kdf;
pub mod keystream;
