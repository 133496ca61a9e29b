//! Cryptographic primitives library with constant-time implementation
//!
//! This crate provides the hash functions, HMAC and secp256k1 curve
//! arithmetic used by the coincrypt signing stack. The library is usable in
//! both `std` and `no_std` environments.
//!
//! # Security Features
//!
//! - Secret scalars and hash state live in buffers that are wiped on drop
//! - Field, scalar and point arithmetic is branch-free on secret data
//! - Comparisons of secret values go through `subtle`

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, NativeHashSuite, Ripemd160, Sha1, Sha256, Sha512};

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// Elliptic Curve primitives
pub mod ec;
pub use ec::{k256, K256Point, K256Scalar};

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest, FixedSize};

// Re-export security types from coincrypt-common
pub use coincrypt_common::security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
