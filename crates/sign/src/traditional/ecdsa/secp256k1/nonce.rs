//! RFC 6979 deterministic nonce derivation
//!
//! HMAC-DRBG instantiated with HMAC-SHA256 from a [`HashSuite`], seeded with
//! the private key and the message digest. No extra entropy is mixed in, so
//! the same key and digest always give the same nonce.

use coincrypt_algorithms::ec::k256::{Scalar, K256_SCALAR_SIZE};
use coincrypt_api::{error::Error as ApiError, HashSuite, Result as ApiResult};
use coincrypt_common::security::EphemeralSecret;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Upper bound on rejected candidates before signing gives up
pub const MAX_NONCE_ATTEMPTS: usize = 16;

const SEED_LEN: usize = K256_SCALAR_SIZE + 1 + 2 * K256_SCALAR_SIZE;

/// HMAC-DRBG state (K, V)
#[derive(Zeroize, ZeroizeOnDrop)]
struct HmacDrbg {
    k: [u8; 32],
    v: [u8; 32],
}

impl HmacDrbg {
    /// RFC 6979 §3.2 steps b through g
    fn new<S: HashSuite>(x: &[u8; K256_SCALAR_SIZE], h: &[u8; K256_SCALAR_SIZE]) -> ApiResult<Self> {
        let mut drbg = HmacDrbg {
            k: [0x00; 32],
            v: [0x01; 32],
        };
        drbg.seed::<S>(0x00, x, h)?;
        drbg.seed::<S>(0x01, x, h)?;
        Ok(drbg)
    }

    /// K = HMAC_K(V || marker || x || h); V = HMAC_K(V)
    fn seed<S: HashSuite>(
        &mut self,
        marker: u8,
        x: &[u8; K256_SCALAR_SIZE],
        h: &[u8; K256_SCALAR_SIZE],
    ) -> ApiResult<()> {
        let mut buf = EphemeralSecret::new([0u8; SEED_LEN]);
        buf[..32].copy_from_slice(&self.v);
        buf[32] = marker;
        buf[33..65].copy_from_slice(x);
        buf[65..].copy_from_slice(h);
        self.k = S::hmac_sha256(&self.k, &buf[..])?;
        self.v = S::hmac_sha256(&self.k, &self.v)?;
        Ok(())
    }

    /// V = HMAC_K(V)
    fn generate<S: HashSuite>(&mut self) -> ApiResult<()> {
        self.v = S::hmac_sha256(&self.k, &self.v)?;
        Ok(())
    }

    /// Step h.3: K = HMAC_K(V || 0x00); V = HMAC_K(V)
    fn reseed<S: HashSuite>(&mut self) -> ApiResult<()> {
        let mut buf = EphemeralSecret::new([0u8; 33]);
        buf[..32].copy_from_slice(&self.v);
        self.k = S::hmac_sha256(&self.k, &buf[..])?;
        self.v = S::hmac_sha256(&self.k, &self.v)?;
        Ok(())
    }
}

/// Derive the RFC 6979 nonce for private key `d` and a 32-byte digest.
pub fn derive_nonce<S: HashSuite>(d: &Scalar, digest: &[u8; 32]) -> ApiResult<Scalar> {
    derive_nonce_with::<S, _>(d, digest, |_| true)
}

/// Nonce derivation with an extra acceptance check on each in-range
/// candidate. A rejected candidate advances the DRBG exactly as an
/// out-of-range one does.
pub(crate) fn derive_nonce_with<S, F>(d: &Scalar, digest: &[u8; 32], mut accept: F) -> ApiResult<Scalar>
where
    S: HashSuite,
    F: FnMut(&Scalar) -> bool,
{
    let x = EphemeralSecret::new(d.serialize());
    // bits2octets: the digest reduced mod n
    let h = EphemeralSecret::new(Scalar::reduce(digest).serialize());

    let mut drbg = HmacDrbg::new::<S>(&x, &h)?;

    for attempt in 0..MAX_NONCE_ATTEMPTS {
        drbg.generate::<S>()?;
        if let Ok(candidate) = Scalar::from_bytes_checked(&drbg.v) {
            if accept(&candidate) {
                return Ok(candidate);
            }
        }
        tracing::trace!(attempt, "rfc6979 nonce candidate rejected");
        drbg.reseed::<S>()?;
    }

    tracing::debug!(
        attempts = MAX_NONCE_ATTEMPTS,
        "rfc6979 nonce derivation exhausted"
    );
    Err(ApiError::SignFailed {
        context: "secp256k1 nonce derivation",
        reason: "no valid nonce within the attempt limit",
    })
}
