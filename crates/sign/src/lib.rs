//! Digital Signature Schemes
//!
//! Deterministic ECDSA over secp256k1: key handling, RFC 6979 nonces,
//! low-s signing with recovery ids, verification, public-key recovery and
//! the strict DER signature codec.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod traditional;

// Re-exports from traditional schemes
pub use traditional::ecdsa::{
    derive_public_key, generate_keypair, recover_public_key, sign_prehashed, sign_prehashed_with,
    verify_prehashed, EcdsaSecp256k1, Secp256k1PublicKey, Secp256k1SecretKey, Signature,
};
pub use traditional::ecdsa::secp256k1::{derive_nonce, MAX_NONCE_ATTEMPTS};
