//! ECDSA implementation for the secp256k1 curve
//!
//! Signing follows SEC 1 v2 §4.1.3 with RFC 6979 nonces and always emits
//! low-s signatures (s ≤ n/2) together with the recovery id of the nonce
//! point. Verification is standard ECDSA and never errors.

mod keys;
pub mod nonce;

pub use keys::{derive_public_key, generate_keypair, Secp256k1PublicKey, Secp256k1SecretKey};
pub use nonce::{derive_nonce, MAX_NONCE_ATTEMPTS};

use crate::traditional::ecdsa::common::Signature;
use coincrypt_algorithms::ec::k256::{self as ec, Point, PointFormat, Scalar};
use coincrypt_algorithms::hash::NativeHashSuite;
use coincrypt_api::{
    error::Error as ApiError, HashSuite, Result as ApiResult, Signature as SignatureTrait,
};
use coincrypt_internal::constant_time::{ct_eq, ct_select};
use coincrypt_params::traditional::ecdsa::SECP256K1;
use rand::{CryptoRng, RngCore};

/// ECDSA signature scheme over secp256k1 with SHA-256 message hashing
pub struct EcdsaSecp256k1;

impl SignatureTrait for EcdsaSecp256k1 {
    type PublicKey = Secp256k1PublicKey;
    type SecretKey = Secp256k1SecretKey;
    type SignatureData = Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "ECDSA-secp256k1"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (secret_key, public_key) = generate_keypair(rng)?;
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// Sign SHA-256(message)
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        let digest = NativeHashSuite::sha256(message)?;
        sign_prehashed(secret_key, &digest)
    }

    /// Verify a signature over SHA-256(message)
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        let digest = NativeHashSuite::sha256(message)?;
        if verify_prehashed(public_key, &digest, signature) {
            Ok(())
        } else {
            Err(ApiError::Other {
                context: "ECDSA-secp256k1 verify",
                reason: "signature verification failed",
            })
        }
    }
}

/// Sign a 32-byte digest using the workspace hash suite for RFC 6979
pub fn sign_prehashed(
    secret_key: &Secp256k1SecretKey,
    digest: &[u8; 32],
) -> ApiResult<Signature> {
    sign_prehashed_with::<NativeHashSuite>(secret_key, digest)
}

/// Sign a 32-byte digest, deriving the nonce with the given hash suite
///
/// 1. k = RFC 6979 nonce for (d, digest)
/// 2. R = k·G, r = R.x mod n
/// 3. s = k⁻¹(z + r·d) mod n with z = digest mod n
/// 4. normalize to low-s, adjusting the recovery id
pub fn sign_prehashed_with<S: HashSuite>(
    secret_key: &Secp256k1SecretKey,
    digest: &[u8; 32],
) -> ApiResult<Signature> {
    let d = secret_key.scalar();
    let k = nonce::derive_nonce::<S>(d, digest)?;
    let nonce_point = ec::scalar_mult_base_g(&k)
        .map_err(|e| ApiError::from(e).with_context("ECDSA-secp256k1 sign"))?;
    sign_with_nonce_point(d, &k, &nonce_point, digest)
}

/// Steps 2 to 4 of signing for a given nonce and its point `R = k·G`
pub(crate) fn sign_with_nonce_point(
    d: &Scalar,
    k: &Scalar,
    nonce_point: &Point,
    digest: &[u8; 32],
) -> ApiResult<Signature> {
    if nonce_point.is_identity() {
        return Err(sign_failed("r is zero"));
    }

    let x_bytes = nonce_point.x_coordinate_bytes();
    let r = Scalar::reduce(&x_bytes);
    if r.is_zero() {
        return Err(sign_failed("r is zero"));
    }
    // R.x ≥ n exactly when the reduction changed it
    let x_overflow = !ct_eq(x_bytes, r.serialize());

    let z = Scalar::reduce(digest);
    let k_inv = k
        .inv_mod_n()
        .map_err(|e| ApiError::from(e).with_context("ECDSA-secp256k1 sign"))?;
    let s = k_inv.mul_mod_n(&z.add_mod_n(&r.mul_mod_n(d)));
    if s.is_zero() {
        return Err(sign_failed("s is zero"));
    }

    let recovery_id = u8::from(nonce_point.y_is_odd()) | (u8::from(x_overflow) << 1);

    let high = s.is_high();
    let s = Scalar::conditional_select(&s, &s.negate(), high);
    let recovery_id = ct_select(recovery_id, recovery_id ^ 1, high);

    tracing::debug!(recovery_id, "secp256k1 signature produced");
    Ok(Signature::new(r.serialize(), s.serialize()).with_recovery_id(recovery_id))
}

fn sign_failed(reason: &'static str) -> ApiError {
    ApiError::SignFailed {
        context: "ECDSA-secp256k1 sign",
        reason,
    }
}

/// Verify a signature over a 32-byte digest
///
/// 1. r, s ∈ [1, n-1]
/// 2. w = s⁻¹, u₁ = z·w, u₂ = r·w
/// 3. X = u₁·G + u₂·Q; reject the identity
/// 4. accept iff X.x mod n = r
pub fn verify_prehashed(
    public_key: &Secp256k1PublicKey,
    digest: &[u8; 32],
    signature: &Signature,
) -> bool {
    let (r, s) = match (
        Scalar::from_bytes_checked(signature.r()),
        Scalar::from_bytes_checked(signature.s()),
    ) {
        (Ok(r), Ok(s)) => (r, s),
        _ => {
            tracing::debug!("signature component outside [1, n-1]");
            return false;
        }
    };

    let w = match s.inv_mod_n() {
        Ok(w) => w,
        Err(_) => return false,
    };
    let z = Scalar::reduce(digest);
    let u1 = z.mul_mod_n(&w);
    let u2 = r.mul_mod_n(&w);

    let point = match (
        ec::scalar_mult_base_g(&u1),
        ec::scalar_mult(&u2, public_key.point()),
    ) {
        (Ok(p1), Ok(p2)) => p1.add(&p2),
        _ => return false,
    };
    if point.is_identity() {
        tracing::debug!("verification point is the identity");
        return false;
    }

    let v = Scalar::reduce(&point.x_coordinate_bytes());
    let valid = ct_eq(v.serialize(), r.serialize());
    tracing::trace!(valid, "secp256k1 verification finished");
    valid
}

/// Recover the signer's public key from a digest, signature and recovery id
///
/// The recovery id selects the nonce point: bit 0 is the parity of R.y and
/// bit 1 says whether R.x = r + n. The key is returned compressed.
pub fn recover_public_key(
    digest: &[u8; 32],
    signature: &Signature,
    recovery_id: u8,
) -> ApiResult<Secp256k1PublicKey> {
    if recovery_id > 3 {
        return Err(ApiError::InvalidParameter {
            context: "ECDSA-secp256k1 recovery",
            reason: "recovery id must be in 0..=3",
        });
    }
    let r = Scalar::from_bytes_checked(signature.r()).map_err(|_| recovery_param("r outside [1, n-1]"))?;
    let s = Scalar::from_bytes_checked(signature.s()).map_err(|_| recovery_param("s outside [1, n-1]"))?;

    let mut x = *signature.r();
    if recovery_id & 2 != 0 {
        let carry = add_be(&mut x, &SECP256K1.n);
        if carry {
            return Err(ApiError::InvalidPoint {
                context: "ECDSA-secp256k1 recovery",
                reason: "r + n exceeds the field",
            });
        }
    }
    let mut encoded = [0u8; 33];
    encoded[0] = 0x02 | (recovery_id & 1);
    encoded[1..].copy_from_slice(&x);
    let nonce_point = Point::deserialize_compressed(&encoded)
        .map_err(|e| ApiError::from(e).with_context("ECDSA-secp256k1 recovery"))?;

    // Q = r⁻¹(s·R − z·G)
    let r_inv = r
        .inv_mod_n()
        .map_err(|e| ApiError::from(e).with_context("ECDSA-secp256k1 recovery"))?;
    let z = Scalar::reduce(digest);
    let u1 = z.negate().mul_mod_n(&r_inv);
    let u2 = s.mul_mod_n(&r_inv);

    let p1 = ec::scalar_mult_base_g(&u1).map_err(ApiError::from)?;
    let p2 = ec::scalar_mult(&u2, &nonce_point).map_err(ApiError::from)?;
    Secp256k1PublicKey::from_point(p1.add(&p2), PointFormat::Compressed)
        .map_err(|e| e.with_context("ECDSA-secp256k1 recovery"))
}

fn recovery_param(reason: &'static str) -> ApiError {
    ApiError::InvalidParameter {
        context: "ECDSA-secp256k1 recovery",
        reason,
    }
}

/// In-place big-endian addition, returning the carry out
fn add_be(a: &mut [u8; 32], b: &[u8; 32]) -> bool {
    let mut carry = 0u16;
    for i in (0..32).rev() {
        let sum = a[i] as u16 + b[i] as u16 + carry;
        a[i] = sum as u8;
        carry = sum >> 8;
    }
    carry != 0
}

#[cfg(test)]
mod tests;
