//! secp256k1 elliptic curve point operations
//!
//! Affine points are the public representation; arithmetic runs on Jacobian
//! coordinates (X, Y, Z) with x = X/Z², y = Y/Z³ and Z = 0 for the identity.

use crate::ec::k256::{
    constants::{
        K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
    },
    field::FieldElement,
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Format of a serialized elliptic curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// The point at infinity (identity element)
    Identity,
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
    /// Compressed format: 0x02/0x03 || x
    Compressed,
}

/// A point on the secp256k1 elliptic curve in affine coordinates
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Jacobian point; the identity is any point with Z = 0
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let both_identity = self.is_identity & other.is_identity;
        let neither_identity = !self.is_identity & !other.is_identity;
        let same_coords = self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y);
        (both_identity | (neither_identity & same_coords)).into()
    }
}

impl Eq for Point {}

impl ConditionallySelectable for Point {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Point {
            is_identity: Choice::conditional_select(&a.is_identity, &b.is_identity, choice),
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Point {
    /// Create a new point from uncompressed coordinates.
    ///
    /// Returns `InvalidPoint` if a coordinate is ≥ p or the pair does not
    /// satisfy y² = x³ + 7.
    pub fn new_uncompressed(
        x: &[u8; K256_FIELD_ELEMENT_SIZE],
        y: &[u8; K256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x).map_err(|_| Error::InvalidPoint {
            context: "K256 Point",
            reason: "x-coordinate not below field modulus",
        })?;
        let y_fe = FieldElement::from_bytes(y).map_err(|_| Error::InvalidPoint {
            context: "K256 Point",
            reason: "y-coordinate not below field modulus",
        })?;
        if !Self::is_on_curve(&x_fe, &y_fe) {
            return Err(Error::InvalidPoint {
                context: "K256 Point",
                reason: "coordinates do not satisfy curve equation",
            });
        }
        Ok(Point {
            is_identity: Choice::from(0),
            x: x_fe,
            y: y_fe,
        })
    }

    /// Create the identity point (point at infinity).
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Check if this point is valid (on the curve).
    pub fn is_valid(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        Self::is_on_curve(&self.x, &self.y)
    }

    /// Get the x-coordinate of this point as bytes.
    pub fn x_coordinate_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Get the y-coordinate of this point as bytes.
    pub fn y_coordinate_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// True when the affine y-coordinate is odd
    pub fn y_is_odd(&self) -> bool {
        self.y.is_odd().into()
    }

    /// Serialize this point in uncompressed format.
    ///
    /// The identity has no SEC1 encoding here and serializes to all zeros.
    pub fn serialize_uncompressed(&self) -> [u8; K256_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; K256_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = 0x04;
        out[1..33].copy_from_slice(&self.x.to_bytes());
        out[33..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Serialize this point in compressed format.
    pub fn serialize_compressed(&self) -> [u8; K256_POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; K256_POINT_COMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = if self.y_is_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&self.x.to_bytes());
        out
    }

    /// Deserialize a point from uncompressed format.
    ///
    /// Returns an error if the bytes don't represent a valid point. The
    /// all-zero encoding decodes to the identity.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "K256 Uncompressed Point",
            bytes.len(),
            K256_POINT_UNCOMPRESSED_SIZE,
        )?;

        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }

        if bytes[0] != 0x04 {
            return Err(Error::InvalidPoint {
                context: "K256 Point",
                reason: "invalid uncompressed point prefix (expected 0x04)",
            });
        }

        let mut x_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        let mut y_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..33]);
        y_bytes.copy_from_slice(&bytes[33..65]);

        Self::new_uncompressed(&x_bytes, &y_bytes)
    }

    /// Deserialize a point from compressed format.
    ///
    /// Returns an error if the bytes don't represent a valid point. The
    /// all-zero encoding decodes to the identity.
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "K256 Compressed Point",
            bytes.len(),
            K256_POINT_COMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let tag = bytes[0];
        if tag != 0x02 && tag != 0x03 {
            return Err(Error::InvalidPoint {
                context: "K256 Point",
                reason: "invalid compressed point prefix",
            });
        }
        let mut x_bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        x_bytes.copy_from_slice(&bytes[1..]);
        let x_fe = FieldElement::from_bytes(&x_bytes).map_err(|_| Error::InvalidPoint {
            context: "K256 Point",
            reason: "x-coordinate not below field modulus",
        })?;

        // y² = x³ + 7
        let rhs = x_fe.square().mul(&x_fe).add(&FieldElement::B);
        let y_fe = rhs.sqrt().ok_or(Error::InvalidPoint {
            context: "K256 Point",
            reason: "x-coordinate has no square root",
        })?;

        let want_odd = Choice::from(tag & 1);
        let flip = y_fe.is_odd() ^ want_odd;
        let y_final = FieldElement::conditional_select(&y_fe, &y_fe.negate(), flip);

        Ok(Point {
            is_identity: Choice::from(0),
            x: x_fe,
            y: y_final,
        })
    }

    /// Parse a SEC1 encoding, compressed (33 bytes) or uncompressed (65 bytes)
    pub fn from_sec1(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            K256_POINT_COMPRESSED_SIZE => Self::deserialize_compressed(bytes),
            K256_POINT_UNCOMPRESSED_SIZE => Self::deserialize_uncompressed(bytes),
            _ => Err(Error::InvalidPoint {
                context: "K256 Point",
                reason: "SEC1 encoding must be 33 or 65 bytes",
            }),
        }
    }

    /// Detect the SEC1 format of an encoded point without decoding it
    ///
    /// Accepts exactly the lengths `from_sec1` accepts.
    pub fn detect_format(bytes: &[u8]) -> Result<PointFormat> {
        let sec1_len = matches!(
            bytes.len(),
            K256_POINT_COMPRESSED_SIZE | K256_POINT_UNCOMPRESSED_SIZE
        );
        match (bytes.len(), bytes.first()) {
            _ if sec1_len && bytes.iter().all(|&b| b == 0) => Ok(PointFormat::Identity),
            (K256_POINT_COMPRESSED_SIZE, Some(0x02 | 0x03)) => Ok(PointFormat::Compressed),
            (K256_POINT_UNCOMPRESSED_SIZE, Some(0x04)) => Ok(PointFormat::Uncompressed),
            _ => Err(Error::InvalidPoint {
                context: "K256 Point",
                reason: "unrecognised SEC1 encoding",
            }),
        }
    }

    /// Add two points using the group law.
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// Double a point (add it to itself).
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// The additive inverse (x, -y)
    pub fn negate(&self) -> Self {
        Point {
            is_identity: self.is_identity,
            x: self.x,
            y: self.y.negate(),
        }
    }

    /// Scalar multiplication: compute scalar * self.
    ///
    /// Double-and-add-always over all 256 bits; the scalar bit only drives a
    /// constant-time select.
    pub fn mul(&self, scalar: &Scalar) -> Result<Self> {
        let base = self.to_projective();
        let mut acc = ProjectivePoint::identity();
        for i in (0..256).rev() {
            acc = acc.double();
            let sum = acc.add(&base);
            acc = ProjectivePoint::conditional_select(&acc, &sum, scalar.bit(i));
        }
        Ok(acc.to_affine())
    }

    fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        let y_squared = y.square();
        let rhs = x.square().mul(x).add(&FieldElement::B);
        y_squared == rhs
    }

    fn to_projective(self) -> ProjectivePoint {
        let affine = ProjectivePoint {
            x: self.x,
            y: self.y,
            z: FieldElement::one(),
        };
        ProjectivePoint::conditional_select(&affine, &ProjectivePoint::identity(), self.is_identity)
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ProjectivePoint {
    pub fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::one(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Jacobian doubling for a = 0 (dbl-2009-l).
    ///
    /// Z3 = 2·Y1·Z1, so the identity and points with y = 0 map to Z3 = 0.
    pub fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = self.x.add(&b).square().sub(&a).sub(&c).double();
        let e = a.double().add(&a);
        let f = e.square();

        let x3 = f.sub(&d.double());
        let eight_c = c.double().double().double();
        let y3 = e.mul(&d.sub(&x3)).sub(&eight_c);
        let z3 = self.y.mul(&self.z).double();

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Jacobian addition (add-2007-bl) with every special case resolved by
    /// constant-time selection.
    pub fn add(&self, other: &Self) -> Self {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        let s2 = other.y.mul(&self.z).mul(&z1z1);

        let h = u2.sub(&u1);
        let i = h.double().square();
        let j = h.mul(&i);
        let r = s2.sub(&s1).double();
        let v = u1.mul(&i);

        let x3 = r.square().sub(&j).sub(&v.double());
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&j).double());
        // H = 0 with r ≠ 0 (P = -Q) leaves Z3 = 0, the identity
        let z3 = self.z.add(&other.z).square().sub(&z1z1).sub(&z2z2).mul(&h);

        let sum = ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        };
        let doubled = self.double();

        let same_point = h.is_zero() & r.is_zero();
        let mut result = ProjectivePoint::conditional_select(&sum, &doubled, same_point);
        result = ProjectivePoint::conditional_select(&result, other, self.is_identity());
        result = ProjectivePoint::conditional_select(&result, self, other.is_identity());
        result
    }

    /// Convert to affine with a single inversion of Z
    pub fn to_affine(&self) -> Point {
        let is_identity = self.is_identity();
        let z_inv = self.z.invert_or_zero();
        let z_inv_sq = z_inv.square();
        let z_inv_cu = z_inv_sq.mul(&z_inv);
        let affine = Point {
            is_identity: Choice::from(0),
            x: self.x.mul(&z_inv_sq),
            y: self.y.mul(&z_inv_cu),
        };
        Point::conditional_select(&affine, &Point::identity(), is_identity)
    }
}
