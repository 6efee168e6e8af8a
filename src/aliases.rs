//! # Secure-Gate Type Aliases
//!
//! Secret material is wrapped in [`secure-gate`](https://github.com/Slurp9187/secure-gate)
//! types so it is zeroized on drop and only reachable through an explicit
//! `.expose_secret()`.
//!
//! - [`Aes128Key16`] - 16-byte key derived from the seed
//! - [`SeedString`] - the seed string the key is derived from
//!
//! Keystream blocks themselves are not secret (they end up on disk) and are
//! plain `[u8; 16]` arrays, see [`Block`].

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

use crate::consts::BLOCK_SIZE;

dynamic_alias!(pub SeedString, String);

fixed_alias!(pub Aes128Key16, 16); // MD5(seed), AES-128 key

/// One keystream block as it lands on storage.
pub type Block = [u8; BLOCK_SIZE];
