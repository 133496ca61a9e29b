//! # coincrypt
//!
//! Pure Rust primitives for Bitcoin-style address and transaction signing.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! coincrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `alloc`: heap-backed encodings (`Vec` outputs, hex) without `std`
//! - `serde`: `Serialize`/`Deserialize` for signatures
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `coincrypt-algorithms`: SHA-1, SHA-256, SHA-512, RIPEMD-160, HMAC and secp256k1 arithmetic
//! - `coincrypt-sign`: deterministic low-s ECDSA, DER codec, public-key recovery
//!
//! On top of the re-exports it offers a byte-level API:
//!
//! ```
//! let private_key = [0x11u8; 32];
//! let digest = coincrypt::hash::sha256(b"message").unwrap();
//!
//! let public_key = coincrypt::derive_public_key(&private_key, true).unwrap();
//! let signature = coincrypt::sign(&private_key, &digest).unwrap();
//! assert!(coincrypt::verify(&public_key, &digest, &signature));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Core re-exports (always available)
pub use coincrypt_algorithms as algorithms;
pub use coincrypt_api as api;
pub use coincrypt_common as common;
pub use coincrypt_internal as internal;
pub use coincrypt_params as params;
pub use coincrypt_sign as sign;

pub use coincrypt_api::{Error, Result};

pub mod hash;
#[cfg(any(feature = "std", feature = "alloc"))]
pub mod hex;
#[cfg(any(feature = "std", feature = "alloc"))]
mod key;

#[cfg(any(feature = "std", feature = "alloc"))]
pub use key::{derive_public_key, sign, verify, Key};

/// Common imports for coincrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::algorithms::hash::HashFunction;
    pub use crate::api::{HashSuite, Signature as SignatureScheme};

    // Re-export hash and curve types
    pub use crate::algorithms::{Hmac, NativeHashSuite, Ripemd160, Sha1, Sha256, Sha512};
    pub use crate::algorithms::ec::k256::{Point, PointFormat, Scalar};

    // Re-export signing types
    pub use crate::sign::{
        EcdsaSecp256k1, Secp256k1PublicKey, Secp256k1SecretKey, Signature,
    };

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::Key;
}
