//! Hash-function capability used by the signing engine
//!
//! The elliptic-curve code never names a concrete hash implementation. It asks
//! a `HashSuite` for digests and MACs, so any conforming provider can be
//! substituted without touching curve arithmetic.

use crate::Result;

/// SHA-1 digest size in bytes
pub const SHA1_DIGEST_SIZE: usize = 20;
/// SHA-256 digest size in bytes
pub const SHA256_DIGEST_SIZE: usize = 32;
/// SHA-512 digest size in bytes
pub const SHA512_DIGEST_SIZE: usize = 64;
/// RIPEMD-160 digest size in bytes
pub const RIPEMD160_DIGEST_SIZE: usize = 20;

/// Fixed-output hash and MAC operations
///
/// Every method maps input bytes to a digest of fixed length. Errors only
/// surface internal state failures of the underlying implementation.
pub trait HashSuite {
    /// SHA-1 of `data`
    fn sha1(data: &[u8]) -> Result<[u8; SHA1_DIGEST_SIZE]>;

    /// SHA-256 of `data`
    fn sha256(data: &[u8]) -> Result<[u8; SHA256_DIGEST_SIZE]>;

    /// RIPEMD-160 of `data`
    fn ripemd160(data: &[u8]) -> Result<[u8; RIPEMD160_DIGEST_SIZE]>;

    /// HMAC-SHA256 of `data` under `key`
    fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<[u8; SHA256_DIGEST_SIZE]>;

    /// HMAC-SHA512 of `data` under `key`
    fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; SHA512_DIGEST_SIZE]>;

    /// `RIPEMD-160(SHA-256(data))`, the Bitcoin address hash
    fn hash160(data: &[u8]) -> Result<[u8; RIPEMD160_DIGEST_SIZE]> {
        let inner = Self::sha256(data)?;
        Self::ripemd160(&inner)
    }
}
