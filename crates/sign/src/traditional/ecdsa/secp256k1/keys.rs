//! secp256k1 key types
//!
//! Secret keys wrap a range-checked scalar and are wiped on drop. Public
//! keys carry the SEC1 format they should serialize to.

use coincrypt_algorithms::ec::k256::{
    self as ec, Point, PointFormat, Scalar, K256_POINT_COMPRESSED_SIZE,
    K256_POINT_UNCOMPRESSED_SIZE,
};
use coincrypt_api::{error::Error as ApiError, Result as ApiResult};
use coincrypt_params::traditional::ecdsa::SECP256K1_PRIVATE_KEY_SIZE;
use core::fmt;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// secp256k1 secret key
///
/// The scalar d satisfies 1 ≤ d ≤ n-1 where n is the order of the base
/// point G. There is no mutable byte access, so a key can never leave that
/// range once constructed.
#[derive(Clone)]
pub struct Secp256k1SecretKey {
    raw: Scalar,
}

impl Zeroize for Secp256k1SecretKey {
    fn zeroize(&mut self) {
        self.raw.zeroize();
    }
}

impl Drop for Secp256k1SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for Secp256k1SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secp256k1SecretKey([REDACTED])")
    }
}

impl AsRef<[u8]> for Secp256k1SecretKey {
    fn as_ref(&self) -> &[u8] {
        self.raw.as_secret_buffer().as_slice()
    }
}

impl Secp256k1SecretKey {
    /// Parse a 32-byte big-endian private key; rejects 0 and values ≥ n
    pub fn from_bytes(bytes: &[u8; SECP256K1_PRIVATE_KEY_SIZE]) -> ApiResult<Self> {
        let raw = Scalar::from_bytes_checked(bytes).map_err(|_| ApiError::InvalidPrivateKey {
            context: "secp256k1 secret key",
        })?;
        Ok(Secp256k1SecretKey { raw })
    }

    /// Parse a private key from a slice that must be exactly 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> ApiResult<Self> {
        let array: &[u8; SECP256K1_PRIVATE_KEY_SIZE] =
            bytes.try_into().map_err(|_| ApiError::InvalidLength {
                context: "secp256k1 secret key",
                expected: SECP256K1_PRIVATE_KEY_SIZE,
                actual: bytes.len(),
            })?;
        Self::from_bytes(array)
    }

    pub(crate) fn from_scalar(raw: Scalar) -> Self {
        Secp256k1SecretKey { raw }
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.raw
    }
}

/// secp256k1 public key: a non-identity curve point and its SEC1 format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey {
    point: Point,
    format: PointFormat,
}

impl Secp256k1PublicKey {
    /// Wrap a point; the identity is rejected
    pub fn from_point(point: Point, format: PointFormat) -> ApiResult<Self> {
        if point.is_identity() || format == PointFormat::Identity {
            return Err(ApiError::InvalidPoint {
                context: "secp256k1 public key",
                reason: "the identity is not a valid public key",
            });
        }
        Ok(Secp256k1PublicKey { point, format })
    }

    /// Parse a 33-byte compressed or 65-byte uncompressed SEC1 encoding
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let point = Point::from_sec1(bytes)
            .map_err(|e| ApiError::from(e).with_context("secp256k1 public key"))?;
        let format = if bytes.len() == K256_POINT_COMPRESSED_SIZE {
            PointFormat::Compressed
        } else {
            PointFormat::Uncompressed
        };
        Self::from_point(point, format)
    }

    /// The underlying curve point
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// The SEC1 format used by `to_bytes`
    pub fn format(&self) -> PointFormat {
        self.format
    }

    /// True when `to_bytes` yields the 33-byte form
    pub fn is_compressed(&self) -> bool {
        self.format == PointFormat::Compressed
    }

    /// Same point, serialized compressed
    pub fn to_compressed(&self) -> Self {
        Secp256k1PublicKey {
            point: self.point,
            format: PointFormat::Compressed,
        }
    }

    /// Same point, serialized uncompressed
    pub fn to_uncompressed(&self) -> Self {
        Secp256k1PublicKey {
            point: self.point,
            format: PointFormat::Uncompressed,
        }
    }

    /// `0x02|0x03 || x`
    pub fn serialize_compressed(&self) -> [u8; K256_POINT_COMPRESSED_SIZE] {
        self.point.serialize_compressed()
    }

    /// `0x04 || x || y`
    pub fn serialize_uncompressed(&self) -> [u8; K256_POINT_UNCOMPRESSED_SIZE] {
        self.point.serialize_uncompressed()
    }

    /// SEC1 bytes in this key's format (33 or 65 bytes)
    #[cfg(feature = "alloc")]
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.format {
            PointFormat::Uncompressed => self.serialize_uncompressed().to_vec(),
            _ => self.serialize_compressed().to_vec(),
        }
    }
}

/// Compute `priv·G`, returned in compressed format
pub fn derive_public_key(secret_key: &Secp256k1SecretKey) -> ApiResult<Secp256k1PublicKey> {
    let point = ec::scalar_mult_base_g(secret_key.scalar())
        .map_err(|e| ApiError::from(e).with_context("secp256k1 public key derivation"))?;
    Secp256k1PublicKey::from_point(point, PointFormat::Compressed)
}

/// Generate a random key pair from a cryptographically secure RNG
///
/// Candidates outside `[1, n-1]` are discarded and redrawn.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
) -> ApiResult<(Secp256k1SecretKey, Secp256k1PublicKey)> {
    let (scalar, point) = ec::generate_keypair(rng).map_err(ApiError::from)?;
    let public_key = Secp256k1PublicKey::from_point(point, PointFormat::Compressed)?;
    Ok((Secp256k1SecretKey::from_scalar(scalar), public_key))
}
