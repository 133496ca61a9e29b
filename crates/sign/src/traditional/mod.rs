//! Traditional signature schemes
//!
//! Elliptic-curve signatures over secp256k1.

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{
    EcdsaSecp256k1, Secp256k1PublicKey, Secp256k1SecretKey, Signature,
};
