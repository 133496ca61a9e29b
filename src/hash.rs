//! One-shot hash functions over byte slices
//!
//! Thin wrappers over [`NativeHashSuite`](crate::algorithms::NativeHashSuite)
//! returning fixed-size arrays.

use coincrypt_algorithms::hash::{HashFunction, Sha512};
use coincrypt_algorithms::NativeHashSuite;
use coincrypt_api::traits::hash_suite::{
    RIPEMD160_DIGEST_SIZE, SHA1_DIGEST_SIZE, SHA256_DIGEST_SIZE, SHA512_DIGEST_SIZE,
};
use coincrypt_api::{Error, HashSuite, Result};

/// SHA-1 of `data`
pub fn sha1(data: &[u8]) -> Result<[u8; SHA1_DIGEST_SIZE]> {
    NativeHashSuite::sha1(data)
}

/// SHA-256 of `data`
pub fn sha256(data: &[u8]) -> Result<[u8; SHA256_DIGEST_SIZE]> {
    NativeHashSuite::sha256(data)
}

/// SHA-512 of `data`
pub fn sha512(data: &[u8]) -> Result<[u8; SHA512_DIGEST_SIZE]> {
    let digest = Sha512::digest(data).map_err(|e| Error::from(e).with_context("SHA-512"))?;
    Ok(digest.into())
}

/// RIPEMD-160 of `data`
pub fn ripemd160(data: &[u8]) -> Result<[u8; RIPEMD160_DIGEST_SIZE]> {
    NativeHashSuite::ripemd160(data)
}

/// `RIPEMD-160(SHA-256(data))`
pub fn hash160(data: &[u8]) -> Result<[u8; RIPEMD160_DIGEST_SIZE]> {
    NativeHashSuite::hash160(data)
}

/// HMAC-SHA256 of `data` under `key`
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<[u8; SHA256_DIGEST_SIZE]> {
    NativeHashSuite::hmac_sha256(key, data)
}

/// HMAC-SHA512 of `data` under `key`
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; SHA512_DIGEST_SIZE]> {
    NativeHashSuite::hmac_sha512(key, data)
}
