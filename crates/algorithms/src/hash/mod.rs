//! Cryptographic hash functions
//!
//! SHA-1, SHA-256 and SHA-512 (FIPS 180-4) and RIPEMD-160, each exposing the
//! streaming [`HashFunction`] interface, plus the [`NativeHashSuite`] that
//! bundles them behind the workspace `HashSuite` capability.

use crate::error::Result;
use zeroize::Zeroize;

pub(crate) mod block;
pub mod ripemd160;
pub mod sha1;
pub mod sha2;
pub mod suite;

pub use ripemd160::Ripemd160;
pub use sha1::Sha1;
pub use sha2::{Sha256, Sha512};
pub use suite::NativeHashSuite;

/// Static description of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;
    /// Internal block size in bytes
    const BLOCK_SIZE: usize;
    /// Human-readable identifier
    const ALGORITHM_ID: &'static str;
}

/// Streaming hash function interface
pub trait HashFunction: Clone + Zeroize {
    /// Algorithm marker carrying the sizes
    type Algorithm: HashAlgorithm;

    /// Digest type produced by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Create a fresh hasher
    fn new() -> Self;

    /// Absorb more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produce the digest; the hasher is wiped and reset afterwards
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Digest size in bytes
    fn output_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::OUTPUT_SIZE
    }

    /// Internal block size in bytes
    fn block_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        <Self::Algorithm as HashAlgorithm>::ALGORITHM_ID
    }

    /// One-shot convenience wrapper
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut h = Self::new();
        h.update(data)?;
        h.finalize()
    }
}
