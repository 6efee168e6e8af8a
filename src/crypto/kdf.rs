//! src/crypto/kdf.rs
//! Seed expansion: MD5 over the raw seed bytes.
//!
//! This is not a security boundary. The digest is only used so that an
//! arbitrary seed string maps to a reproducible AES-128 key, and any other
//! implementation fed the same seed must arrive at the same key.

use crate::aliases::{Aes128Key16, SeedString};
use crate::consts::KEY_SIZE;
use md5::{Digest, Md5};

/// Derive the keystream key directly into a caller-provided buffer.
///
/// `key = MD5(seed)`; the full 16-byte digest is used.
#[inline]
pub fn derive_key(seed: &SeedString, out_key: &mut Aes128Key16) {
    let digest = Md5::digest(seed.expose_secret().as_bytes());
    out_key.expose_secret_mut().copy_from_slice(&digest);
}

/// Convenience wrapper returning a freshly wrapped key for a plain `&str` seed.
pub fn derive_key_from_str(seed: &str) -> Aes128Key16 {
    let seed = SeedString::new(seed.to_owned());
    let mut key = Aes128Key16::new([0u8; KEY_SIZE]);
    derive_key(&seed, &mut key);
    key
}
