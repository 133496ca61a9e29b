//! Elliptic Curve Primitives
//!
//! Constant-time arithmetic on the Koblitz curve secp256k1, the foundation
//! for ECDSA signing, verification and public-key recovery.

pub mod k256;

pub use k256::{Point as K256Point, Scalar as K256Scalar};
