//! Byte-level signing API and the `Key` convenience type

use coincrypt_api::Result;
use coincrypt_sign::{
    sign_prehashed, verify_prehashed, Secp256k1PublicKey, Secp256k1SecretKey, Signature,
};
use rand::{CryptoRng, RngCore};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Derive the SEC1 public key for a raw private key (33 or 65 bytes)
pub fn derive_public_key(private_key: &[u8; 32], compressed: bool) -> Result<Vec<u8>> {
    let secret_key = Secp256k1SecretKey::from_bytes(private_key)?;
    let public_key = coincrypt_sign::derive_public_key(&secret_key)?;
    let public_key = if compressed {
        public_key
    } else {
        public_key.to_uncompressed()
    };
    Ok(public_key.to_bytes())
}

/// Sign a 32-byte digest, returning the DER-encoded low-s signature
pub fn sign(private_key: &[u8; 32], digest: &[u8; 32]) -> Result<Vec<u8>> {
    let secret_key = Secp256k1SecretKey::from_bytes(private_key)?;
    Ok(sign_prehashed(&secret_key, digest)?.to_der())
}

/// Verify a DER signature over a digest against a SEC1 public key
///
/// Malformed keys and signatures verify as false.
pub fn verify(public_key: &[u8], digest: &[u8; 32], der_signature: &[u8]) -> bool {
    let public_key = match Secp256k1PublicKey::from_bytes(public_key) {
        Ok(pk) => pk,
        Err(_) => return false,
    };
    let signature = match Signature::from_der(der_signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    verify_prehashed(&public_key, digest, &signature)
}

/// A private key together with its compressed public key
#[derive(Clone, Debug)]
pub struct Key {
    secret: Secp256k1SecretKey,
    public: Secp256k1PublicKey,
}

impl Key {
    /// Load a key from 32 raw private-key bytes
    pub fn from_bytes(private_key: &[u8; 32]) -> Result<Self> {
        let secret = Secp256k1SecretKey::from_bytes(private_key)?;
        let public = coincrypt_sign::derive_public_key(&secret)?;
        Ok(Key { secret, public })
    }

    /// Generate a fresh random key
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let (secret, public) = coincrypt_sign::generate_keypair(rng)?;
        Ok(Key { secret, public })
    }

    /// The public key, compressed
    pub fn public_key(&self) -> &Secp256k1PublicKey {
        &self.public
    }

    /// The 33-byte compressed SEC1 public key
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.public.to_bytes()
    }

    /// The 65-byte uncompressed SEC1 public key
    pub fn public_key_uncompressed(&self) -> Vec<u8> {
        self.public.to_uncompressed().to_bytes()
    }

    /// `hash160` of the compressed public key
    pub fn public_key_hash(&self) -> Result<[u8; 20]> {
        crate::hash::hash160(&self.public.serialize_compressed())
    }

    /// Sign a 32-byte digest, returning DER bytes
    pub fn sign(&self, digest: &[u8; 32]) -> Result<Vec<u8>> {
        Ok(self.sign_recoverable(digest)?.to_der())
    }

    /// Sign a 32-byte digest, keeping the recovery id
    pub fn sign_recoverable(&self, digest: &[u8; 32]) -> Result<Signature> {
        sign_prehashed(&self.secret, digest)
    }

    /// Verify a DER signature made by this key
    pub fn verify(&self, digest: &[u8; 32], der_signature: &[u8]) -> bool {
        match Signature::from_der(der_signature) {
            Ok(sig) => verify_prehashed(&self.public, digest, &sig),
            Err(_) => false,
        }
    }
}
