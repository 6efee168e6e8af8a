//! src/crypto/keystream.rs
//! Counter keystream: AES-128 in electronic-codebook mode over a 64-bit counter.
//!
//! Block `n` is `AES-128(key, LE64(n) || 0^8)`. The cipher never chains, so
//! the counter alone decides what a block looks like and any block can be
//! recomputed in isolation by a verifier that knows the seed.

use crate::aliases::{Aes128Key16, Block};
use crate::consts::BLOCK_SIZE;
use crate::error::PrngbbError;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128Dec, Aes128Enc, Block as AesBlock};

/// Lays out the plaintext for `counter`: low 8 bytes little-endian, high 8 zero.
#[inline(always)]
pub fn counter_plaintext(counter: u64) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block[..8].copy_from_slice(&counter.to_le_bytes());
    block
}

/// Owned generator state: the expanded key schedule and the run-wide counter.
///
/// The counter starts at zero and is advanced *before* each block is produced,
/// so the first block of a run belongs to counter 1.
pub struct Keystream {
    cipher: Aes128Enc,
    counter: u64,
}

impl Keystream {
    /// Build a generator from a derived key with the counter at zero.
    pub fn new(key: &Aes128Key16) -> Self {
        Self {
            cipher: Aes128Enc::new(key.expose_secret().into()),
            counter: 0,
        }
    }

    /// Counter value of the most recently produced block (0 before the first).
    #[inline]
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Block for an arbitrary counter value. Does not touch the run counter.
    #[inline]
    pub fn block_at(&self, counter: u64) -> Block {
        let mut block = AesBlock::from(counter_plaintext(counter));
        self.cipher.encrypt_block(&mut block);
        let mut out = [0u8; BLOCK_SIZE];
        out.copy_from_slice(block.as_slice());
        out
    }

    /// Advance the counter by one and return the block for the new value.
    #[inline]
    pub fn next_block(&mut self) -> Block {
        self.counter += 1;
        self.block_at(self.counter)
    }

    /// Fill `chunk` with consecutive blocks, advancing the counter by
    /// `chunk.len() / BLOCK_SIZE`.
    ///
    /// The counter is left untouched if `chunk` is not a whole number of
    /// blocks.
    pub fn fill_chunk(&mut self, chunk: &mut [u8]) -> Result<(), PrngbbError> {
        if chunk.len() % BLOCK_SIZE != 0 {
            return Err(PrngbbError::Crypto(format!(
                "keystream chunk of {} bytes is not a multiple of the {BLOCK_SIZE}-byte block size",
                chunk.len()
            )));
        }

        for slot in chunk.chunks_exact_mut(BLOCK_SIZE) {
            self.counter += 1;
            slot.copy_from_slice(&counter_plaintext(self.counter));
            self.cipher.encrypt_block(AesBlock::from_mut_slice(slot));
        }

        Ok(())
    }
}

/// Inverse of [`Keystream`]: recovers the counter a stored block was made from.
pub struct KeystreamDecoder {
    cipher: Aes128Dec,
}

impl KeystreamDecoder {
    pub fn new(key: &Aes128Key16) -> Self {
        Self {
            cipher: Aes128Dec::new(key.expose_secret().into()),
        }
    }

    /// Decrypt `block` and return its counter, or `None` if the upper eight
    /// plaintext bytes are not zero (the block was not produced under this key).
    #[inline]
    pub fn decode(&self, block: &Block) -> Option<u64> {
        let mut plain = AesBlock::from(*block);
        self.cipher.decrypt_block(&mut plain);

        let (low, high) = plain.as_slice().split_at(8);
        if high.iter().any(|&b| b != 0) {
            return None;
        }
        let mut counter = [0u8; 8];
        counter.copy_from_slice(low);
        Some(u64::from_le_bytes(counter))
    }
}
