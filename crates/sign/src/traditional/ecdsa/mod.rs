//! ECDSA signature implementation for the secp256k1 curve
//!
//! `common` holds the curve-independent signature value and its DER and
//! compact encodings; `secp256k1` holds keys, nonces, signing, verification
//! and public-key recovery.

pub mod common;
pub mod secp256k1;

pub use common::Signature;

// Re-export secp256k1 types
pub use secp256k1::{
    derive_public_key, generate_keypair, recover_public_key, sign_prehashed,
    sign_prehashed_with, verify_prehashed, EcdsaSecp256k1, Secp256k1PublicKey,
    Secp256k1SecretKey,
};
