//! SHA-2 hash functions
//!
//! SHA-256 and SHA-512 as specified in FIPS PUB 180-4. Both share one
//! compression routine, instantiated per word size. The message schedule is
//! kept as a rolling window of 16 words. Working state is wiped after every
//! compression and when the hasher is dropped.

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

use coincrypt_params::utils::hash::{
    SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE, SHA512_BLOCK_SIZE, SHA512_OUTPUT_SIZE,
};

const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const K512: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

const H256: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

const H512: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

/// Compression function over eight working words.
///
/// `big0`/`big1` are the Σ rotations; `small0`/`small1` are the σ
/// rotations with their final shift.
macro_rules! sha2_compress {
    (
        $name:ident, $word:ty, $k:ident, $read:ident,
        big0 = [$a0:expr, $a1:expr, $a2:expr],
        big1 = [$e0:expr, $e1:expr, $e2:expr],
        small0 = [$p0:expr, $p1:expr, $p2:expr],
        small1 = [$q0:expr, $q1:expr, $q2:expr]
    ) => {
        fn $name(state: &mut [$word; 8], block: &[u8]) {
            let mut w = EphemeralSecret::new([0 as $word; 16]);
            BigEndian::$read(block, &mut w[..]);

            let mut working = *state;
            let mut v = ZeroizeGuard::new(&mut working);

            compiler_fence(Ordering::SeqCst);

            for (t, k) in $k.iter().enumerate() {
                if t >= 16 {
                    // w[t] = w[t-16] + σ0(w[t-15]) + w[t-7] + σ1(w[t-2]), mod 16
                    let x = w[(t + 1) & 15];
                    let y = w[(t + 14) & 15];
                    let s0 = x.rotate_right($p0) ^ x.rotate_right($p1) ^ (x >> $p2);
                    let s1 = y.rotate_right($q0) ^ y.rotate_right($q1) ^ (y >> $q2);
                    w[t & 15] = w[t & 15]
                        .wrapping_add(s0)
                        .wrapping_add(w[(t + 9) & 15])
                        .wrapping_add(s1);
                }

                let [a, b, c, d, e, f, g, h] = *v;
                let t1 = h
                    .wrapping_add(e.rotate_right($e0) ^ e.rotate_right($e1) ^ e.rotate_right($e2))
                    .wrapping_add((e & f) ^ (!e & g))
                    .wrapping_add(*k)
                    .wrapping_add(w[t & 15]);
                let t2 = (a.rotate_right($a0) ^ a.rotate_right($a1) ^ a.rotate_right($a2))
                    .wrapping_add((a & b) ^ (a & c) ^ (b & c));
                *v = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
            }

            for (s, x) in state.iter_mut().zip(v.iter()) {
                *s = s.wrapping_add(*x);
            }

            compiler_fence(Ordering::SeqCst);
        }
    };
}

sha2_compress!(
    compress256, u32, K256, read_u32_into,
    big0 = [2, 13, 22],
    big1 = [6, 11, 25],
    small0 = [7, 18, 3],
    small1 = [17, 19, 10]
);

sha2_compress!(
    compress512, u64, K512, read_u64_into,
    big0 = [28, 34, 39],
    big1 = [14, 18, 41],
    small0 = [1, 8, 7],
    small1 = [19, 61, 6]
);

/// Marker type for SHA-256 algorithm
pub enum Sha256Algorithm {}

impl HashAlgorithm for Sha256Algorithm {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-256";
}

/// Marker type for SHA-512 algorithm
pub enum Sha512Algorithm {}

impl HashAlgorithm for Sha512Algorithm {
    const OUTPUT_SIZE: usize = SHA512_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA512_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-512";
}

/// SHA-256 hasher
#[derive(Clone, Zeroize)]
pub struct Sha256 {
    state: [u32; 8],
    block: BlockBuffer<SHA256_BLOCK_SIZE>,
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl HashFunction for Sha256 {
    type Algorithm = Sha256Algorithm;
    type Output = Digest<SHA256_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha256 {
            state: H256,
            block: BlockBuffer::new(),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        let state = &mut self.state;
        self.block.absorb(data, |b| compress256(state, b));
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let state = &mut self.state;
        self.block.finish(LengthEncoding::Be64, |b| compress256(state, b));

        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut out);
        self.state = H256;
        Ok(Digest::new(out))
    }
}

/// SHA-512 hasher
#[derive(Clone, Zeroize)]
pub struct Sha512 {
    state: [u64; 8],
    block: BlockBuffer<SHA512_BLOCK_SIZE>,
}

impl Drop for Sha512 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl HashFunction for Sha512 {
    type Algorithm = Sha512Algorithm;
    type Output = Digest<SHA512_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha512 {
            state: H512,
            block: BlockBuffer::new(),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        let state = &mut self.state;
        self.block.absorb(data, |b| compress512(state, b));
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let state = &mut self.state;
        self.block.finish(LengthEncoding::Be128, |b| compress512(state, b));

        let mut out = [0u8; SHA512_OUTPUT_SIZE];
        BigEndian::write_u64_into(&self.state, &mut out);
        self.state = H512;
        Ok(Digest::new(out))
    }
}
