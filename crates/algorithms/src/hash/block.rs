//! Block buffering and Merkle-Damgård length padding
//!
//! Every hasher in this crate consumes fixed-size blocks and finishes with
//! `0x80`, zero fill and the message bit length. [`BlockBuffer`] owns the
//! partial block and the byte count; the hasher supplies its compression
//! function as a closure.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use zeroize::Zeroize;

/// How the message bit length is appended in the final block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LengthEncoding {
    /// 64-bit big-endian (SHA-1, SHA-256)
    Be64,
    /// 128-bit big-endian (SHA-512)
    Be128,
    /// 64-bit little-endian (RIPEMD-160)
    Le64,
}

impl LengthEncoding {
    const fn width(self) -> usize {
        match self {
            LengthEncoding::Be64 | LengthEncoding::Le64 => 8,
            LengthEncoding::Be128 => 16,
        }
    }
}

/// Partial input block plus the count of bytes already compressed
#[derive(Clone)]
pub(crate) struct BlockBuffer<const B: usize> {
    data: [u8; B],
    pos: usize,
    compressed: u128,
}

impl<const B: usize> Zeroize for BlockBuffer<B> {
    fn zeroize(&mut self) {
        self.data.zeroize();
        self.pos.zeroize();
        self.compressed.zeroize();
    }
}

impl<const B: usize> BlockBuffer<B> {
    pub(crate) const fn new() -> Self {
        BlockBuffer {
            data: [0u8; B],
            pos: 0,
            compressed: 0,
        }
    }

    /// Feed `input`, calling `compress` once per completed block
    pub(crate) fn absorb(&mut self, mut input: &[u8], mut compress: impl FnMut(&[u8; B])) {
        if self.pos > 0 {
            let take = core::cmp::min(input.len(), B - self.pos);
            self.data[self.pos..self.pos + take].copy_from_slice(&input[..take]);
            self.pos += take;
            input = &input[take..];
            if self.pos < B {
                return;
            }
            compress(&self.data);
            self.compressed = self.compressed.wrapping_add(B as u128);
            self.pos = 0;
        }

        let mut blocks = input.chunks_exact(B);
        for block in &mut blocks {
            self.data.copy_from_slice(block);
            compress(&self.data);
            self.compressed = self.compressed.wrapping_add(B as u128);
        }

        let rest = blocks.remainder();
        self.data[..rest.len()].copy_from_slice(rest);
        self.pos = rest.len();
    }

    /// Append padding and the bit length, compress the last block(s) and
    /// wipe the buffer
    pub(crate) fn finish(&mut self, length: LengthEncoding, mut compress: impl FnMut(&[u8; B])) {
        let bits = self
            .compressed
            .wrapping_add(self.pos as u128)
            .wrapping_mul(8);

        self.data[self.pos] = 0x80;
        self.data[self.pos + 1..].fill(0);
        // No room left for the length field
        if self.pos >= B - length.width() {
            compress(&self.data);
            self.data.fill(0);
        }

        match length {
            LengthEncoding::Be64 => BigEndian::write_u64(&mut self.data[B - 8..], bits as u64),
            LengthEncoding::Le64 => LittleEndian::write_u64(&mut self.data[B - 8..], bits as u64),
            LengthEncoding::Be128 => BigEndian::write_u128(&mut self.data[B - 16..], bits),
        }
        compress(&self.data);
        self.zeroize();
    }
}
