//! RIPEMD-160 hash function
//!
//! Two parallel lines of five 16-step rounds over little-endian message
//! words, combined after every block. Used for `hash160` address digests.

use crate::error::Result;
use crate::hash::block::{BlockBuffer, LengthEncoding};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;
use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

use coincrypt_common::security::{EphemeralSecret, ZeroizeGuard};
#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};

use coincrypt_params::utils::hash::{RIPEMD160_BLOCK_SIZE, RIPEMD160_OUTPUT_SIZE};

// Message word selection, left line
const R_LEFT: [usize; 80] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
    7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8, //
    3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12, //
    1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2, //
    4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];

// Message word selection, right line
const R_RIGHT: [usize; 80] = [
    5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12, //
    6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2, //
    15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13, //
    8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14, //
    12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

// Rotation amounts, left line
const S_LEFT: [u32; 80] = [
    11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8, //
    7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12, //
    11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5, //
    11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12, //
    9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];

// Rotation amounts, right line
const S_RIGHT: [u32; 80] = [
    8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6, //
    9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11, //
    9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5, //
    15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8, //
    8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

const K_LEFT: [u32; 5] = [0x00000000, 0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xA953FD4E];
const K_RIGHT: [u32; 5] = [0x50A28BE6, 0x5C4DD124, 0x6D703EF3, 0x7A6D76E9, 0x00000000];

/// Marker type for RIPEMD-160 algorithm
pub enum Ripemd160Algorithm {}

impl HashAlgorithm for Ripemd160Algorithm {
    const OUTPUT_SIZE: usize = RIPEMD160_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = RIPEMD160_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "RIPEMD-160";
}

/// RIPEMD-160 hash function state
#[derive(Clone, Zeroize)]
pub struct Ripemd160 {
    state: [u32; 5],
    block: BlockBuffer<RIPEMD160_BLOCK_SIZE>,
}

impl Drop for Ripemd160 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Boolean function for round `round` (0..5)
#[inline(always)]
fn f(round: usize, x: u32, y: u32, z: u32) -> u32 {
    match round {
        0 => x ^ y ^ z,
        1 => (x & y) | (!x & z),
        2 => (x | !y) ^ z,
        3 => (x & z) | (y & !z),
        _ => x ^ (y | !z),
    }
}

impl Ripemd160 {
    const INIT_STATE: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

    fn compress(state: &mut [u32; 5], block: &[u8]) {
        let mut x = EphemeralSecret::new([0u32; 16]);

        compiler_fence(Ordering::SeqCst);

        LittleEndian::read_u32_into(block, &mut x[..]);

        let mut lines = [*state, *state];
        let mut guard = ZeroizeGuard::new(&mut lines);

        for i in 0..80 {
            let round = i / 16;

            let [al, bl, cl, dl, el] = guard[0];
            let t = al
                .wrapping_add(f(round, bl, cl, dl))
                .wrapping_add(x[R_LEFT[i]])
                .wrapping_add(K_LEFT[round])
                .rotate_left(S_LEFT[i])
                .wrapping_add(el);
            guard[0] = [el, t, bl, cl.rotate_left(10), dl];

            let [ar, br, cr, dr, er] = guard[1];
            let t = ar
                .wrapping_add(f(4 - round, br, cr, dr))
                .wrapping_add(x[R_RIGHT[i]])
                .wrapping_add(K_RIGHT[round])
                .rotate_left(S_RIGHT[i])
                .wrapping_add(er);
            guard[1] = [er, t, br, cr.rotate_left(10), dr];
        }

        let [al, bl, cl, dl, el] = guard[0];
        let [ar, br, cr, dr, er] = guard[1];
        let t = state[1].wrapping_add(cl).wrapping_add(dr);
        state[1] = state[2].wrapping_add(dl).wrapping_add(er);
        state[2] = state[3].wrapping_add(el).wrapping_add(ar);
        state[3] = state[4].wrapping_add(al).wrapping_add(br);
        state[4] = state[0].wrapping_add(bl).wrapping_add(cr);
        state[0] = t;

        compiler_fence(Ordering::SeqCst);
    }
}

impl HashFunction for Ripemd160 {
    type Algorithm = Ripemd160Algorithm;
    type Output = Digest<RIPEMD160_OUTPUT_SIZE>;

    fn new() -> Self {
        Ripemd160 {
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
        self.block.finish(LengthEncoding::Le64, |b| Self::compress(state, b));

        let mut out = [0u8; RIPEMD160_OUTPUT_SIZE];
        LittleEndian::write_u32_into(&self.state, &mut out);
        self.state = Self::INIT_STATE;
        Ok(Digest::new(out))
    }
}
