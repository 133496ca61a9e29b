//! SHA-1 hash function
//!
//! FIPS PUB 180-4. SHA-1 is not collision resistant; it is provided for
//! legacy identifiers only and is never used inside the signing path.

use crate::error::Result;
use crate::hash::block::{BlockBuffer, LengthEncoding};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use coincrypt_common::security::{EphemeralSecret, ZeroizeGuard};
#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};

use coincrypt_params::utils::hash::{SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE};

/// Marker type for SHA-1 algorithm
pub enum Sha1Algorithm {}

impl HashAlgorithm for Sha1Algorithm {
    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA1_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-1";
}

/// SHA-1 hash function state
#[derive(Clone, Zeroize)]
pub struct Sha1 {
    state: [u32; 5],
    block: BlockBuffer<SHA1_BLOCK_SIZE>,
}

impl Drop for Sha1 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Sha1 {
    const INIT_STATE: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

    fn compress(state: &mut [u32; 5], block: &[u8]) {
        let mut w = EphemeralSecret::new([0u32; 80]);

        compiler_fence(Ordering::SeqCst);

        BigEndian::read_u32_into(block, &mut w[..16]);
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let mut working = *state;
        let mut guard = ZeroizeGuard::new(&mut working);

        for (i, wi) in w.iter().enumerate() {
            let [a, b, c, d, e] = *guard;
            let (f, k) = match i {
                0..=19 => ((b & c) | ((!b) & d), 0x5A827999),
                20..=39 => (b ^ c ^ d, 0x6ED9EBA1),
                40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1BBCDC),
                _ => (b ^ c ^ d, 0xCA62C1D6),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(*wi);
            *guard = [temp, a, b.rotate_left(30), c, d];
        }

        for (s, v) in state.iter_mut().zip(guard.iter()) {
            *s = s.wrapping_add(*v);
        }

        compiler_fence(Ordering::SeqCst);
    }
}

impl HashFunction for Sha1 {
    type Algorithm = Sha1Algorithm;
    type Output = Digest<SHA1_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha1 {
            state: Self::INIT_STATE,
            block: BlockBuffer::new(),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        let state = &mut self.state;
        self.block.absorb(data, |b| Self::compress(state, b));
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let state = &mut self.state;
        self.block.finish(LengthEncoding::Be64, |b| Self::compress(state, b));

        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut out);
        self.state = Self::INIT_STATE;
        Ok(Digest::new(out))
    }
}
