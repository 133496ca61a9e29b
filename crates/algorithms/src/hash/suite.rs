//! Native provider of the `HashSuite` capability

use coincrypt_api::traits::hash_suite::{
    HashSuite, RIPEMD160_DIGEST_SIZE, SHA1_DIGEST_SIZE, SHA256_DIGEST_SIZE, SHA512_DIGEST_SIZE,
};
use coincrypt_api::Result as ApiResult;

use crate::error::to_core_result;
use crate::hash::{HashFunction, Ripemd160, Sha1, Sha256, Sha512};
use crate::mac::Hmac;

/// `HashSuite` backed by this crate's own hash and HMAC implementations
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHashSuite;

impl HashSuite for NativeHashSuite {
    fn sha1(data: &[u8]) -> ApiResult<[u8; SHA1_DIGEST_SIZE]> {
        to_core_result(Sha1::digest(data), "SHA-1").map(Into::into)
    }

    fn sha256(data: &[u8]) -> ApiResult<[u8; SHA256_DIGEST_SIZE]> {
        to_core_result(Sha256::digest(data), "SHA-256").map(Into::into)
    }

    fn ripemd160(data: &[u8]) -> ApiResult<[u8; RIPEMD160_DIGEST_SIZE]> {
        to_core_result(Ripemd160::digest(data), "RIPEMD-160").map(Into::into)
    }

    fn hmac_sha256(key: &[u8], data: &[u8]) -> ApiResult<[u8; SHA256_DIGEST_SIZE]> {
        to_core_result(Hmac::<Sha256>::mac(key, data), "HMAC-SHA256").map(Into::into)
    }

    fn hmac_sha512(key: &[u8], data: &[u8]) -> ApiResult<[u8; SHA512_DIGEST_SIZE]> {
        to_core_result(Hmac::<Sha512>::mac(key, data), "HMAC-SHA512").map(Into::into)
    }
}
