//! HMAC (Hash-based Message Authentication Code), allocation-free
//!
//! RFC 2104 / FIPS 198-1. Key material lives in fixed stack buffers that are
//! wiped on drop; the key preparation path does not branch on key bytes.

use crate::error::{validate, Error, Result};
use crate::hash::HashFunction;
use coincrypt_common::security::SecretBuffer;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

const MAX_BLOCK: usize = 128; // SHA-512 block size, the largest supported
const MAX_OUTPUT: usize = 64;

/// Constant-time HMAC implementation.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hmac<H: HashFunction> {
    hash: H,
    opad: SecretBuffer<MAX_BLOCK>,
    block_size: usize,
    is_finalized: bool,
}

impl<H: HashFunction> Hmac<H> {
    const IPAD_BYTE: u8 = 0x36;
    const OPAD_BYTE: u8 = 0x5c;

    /// Create a new HMAC instance from `key`.
    pub fn new(key: &[u8]) -> Result<Self> {
        let bs = H::block_size();
        validate::parameter(
            bs <= MAX_BLOCK && H::output_size() <= MAX_OUTPUT,
            "hmac",
            "hash block size not supported",
        )?;

        // Hash the key unconditionally so the running time
        // depends only on the public key length.
        let hashed = H::digest(key)?;

        // Select either `key` or `hashed` per byte with a mask.
        let mut k_prime = SecretBuffer::<MAX_BLOCK>::zeroed();
        let long = (key.len() > bs) as u8;
        let mask = long.wrapping_neg();
        for (i, b) in k_prime.as_mut_slice().iter_mut().take(bs).enumerate() {
            let k = key.get(i).copied().unwrap_or(0);
            let hk = hashed.as_ref().get(i).copied().unwrap_or(0);
            *b = (hk & mask) | (k & !mask);
        }

        let mut ipad = SecretBuffer::<MAX_BLOCK>::zeroed();
        let mut opad = SecretBuffer::<MAX_BLOCK>::zeroed();
        for i in 0..bs {
            ipad.as_mut_slice()[i] = k_prime.as_slice()[i] ^ Self::IPAD_BYTE;
            opad.as_mut_slice()[i] = k_prime.as_slice()[i] ^ Self::OPAD_BYTE;
        }

        let mut hash = H::new();
        hash.update(&ipad.as_slice()[..bs])?;

        Ok(Self {
            hash,
            opad,
            block_size: bs,
            is_finalized: false,
        })
    }

    /// Feed additional `data` into the MAC.
    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        if self.is_finalized {
            return Err(Error::MacError {
                algorithm: "HMAC",
                details: "Cannot update after finalization",
            });
        }
        self.hash.update(data)?;
        Ok(self)
    }

    /// Finalise and return the tag.
    pub fn finalize(&mut self) -> Result<H::Output> {
        if self.is_finalized {
            return Err(Error::MacError {
                algorithm: "HMAC",
                details: "HMAC already finalized",
            });
        }
        self.is_finalized = true;

        let inner_hash = self.hash.finalize()?;

        let mut outer = H::new();
        outer.update(&self.opad.as_slice()[..self.block_size])?;
        outer.update(inner_hash.as_ref())?;
        outer.finalize()
    }

    /// One-shot MAC helper.
    pub fn mac(key: &[u8], data: &[u8]) -> Result<H::Output> {
        let mut h = Self::new(key)?;
        h.update(data)?;
        h.finalize()
    }

    /// Constant-time verification of `tag` against `key` / `data`.
    pub fn verify(key: &[u8], data: &[u8], tag: &[u8]) -> Result<bool> {
        let expected = Self::mac(key, data)?;
        let expected = expected.as_ref();

        // Iterate over the fixed, public digest length so a short tag
        // does not shorten the comparison.
        let mut diff = 0u8;
        for (i, a) in expected.iter().enumerate() {
            diff |= a ^ tag.get(i).copied().unwrap_or(0);
        }
        diff |= ((tag.len() != expected.len()) as u8).wrapping_neg();

        Ok(diff.ct_eq(&0u8).into())
    }
}

#[cfg(test)]
mod tests;
