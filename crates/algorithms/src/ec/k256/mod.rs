//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! This module implements the secp256k1 elliptic curve operations in constant time.
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! Scalar multiplication always runs the full 256-step ladder and selects
//! with `subtle::Choice`, so its timing does not depend on the scalar.

mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{
    K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
    K256_SCALAR_SIZE,
};
pub use field::FieldElement;
pub use point::{Point, PointFormat};
pub use scalar::Scalar;

use crate::error::{Error, Result};
use coincrypt_params::traditional::ecdsa::SECP256K1;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> Result<Point> {
    Point::new_uncompressed(&SECP256K1.g_x, &SECP256K1.g_y)
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    let g = base_point_g()?;
    g.mul(scalar)
}

/// Generate a random private scalar in [1, n-1] and its public point.
///
/// Candidates at or above n are redrawn rather than reduced.
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let mut scalar_bytes = [0u8; K256_SCALAR_SIZE];
    loop {
        rng.fill_bytes(&mut scalar_bytes);
        match Scalar::from_bytes_checked(&scalar_bytes) {
            Ok(private_key) => {
                scalar_bytes.zeroize();
                let public_key = scalar_mult_base_g(&private_key)?;
                return Ok((private_key, public_key));
            }
            Err(Error::InvalidPrivateKey { .. }) => continue,
            Err(e) => {
                scalar_bytes.zeroize();
                return Err(e);
            }
        }
    }
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Result<Point> {
    if point.is_identity() {
        return Ok(Point::identity());
    }
    point.mul(scalar)
}
