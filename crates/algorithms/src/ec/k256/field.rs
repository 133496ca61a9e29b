//! secp256k1 field arithmetic
//!
//! Elements of F_p with p = 2^256 - 2^32 - 977, stored as eight little-endian
//! 32-bit limbs. Add, sub and mul are branch-free; the modular reduction folds
//! the high half back in using 2^256 ≡ 2^32 + 977 (mod p).

use crate::ec::k256::constants::{K256_FIELD_ELEMENT_SIZE, NLIMBS};
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// secp256k1 field element, canonical in `[0, p-1]`
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

/// p - 2, the Fermat inversion exponent (big-endian)
const P_MINUS_2: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2D,
];

/// (p + 1) / 4, the square-root exponent for p ≡ 3 (mod 4) (big-endian)
const P_PLUS_1_DIV_4: [u8; 32] = [
    0x3F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xBF, 0xFF, 0xFF, 0x0C,
];

impl FieldElement {
    /// p = 2^256 - 2^32 - 977, little-endian limbs
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = [
        0xFFFF_FC2F,
        0xFFFF_FFFE,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
    ];

    /// 2^256 mod p = 2^32 + 977
    const FOLD_LIMBS: [u32; 2] = [0x0000_03D1, 0x0000_0001];

    /// Curve coefficient b = 7
    pub(crate) const B: FieldElement = FieldElement([7, 0, 0, 0, 0, 0, 0, 0]);

    /// Build a field element from a small literal
    #[inline]
    pub fn from_u32(n: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = n;
        FieldElement(limbs)
    }

    /// The additive identity: 0
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub fn one() -> Self {
        Self::from_u32(1)
    }

    /// Create a field element from big-endian bytes, rejecting values ≥ p.
    pub fn from_bytes(bytes: &[u8; K256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs = be_bytes_to_limbs(bytes);
        let (_, borrow) = sbb8(&limbs, &Self::MOD_LIMBS);
        if borrow == 0 {
            return Err(Error::param("K256 FieldElement", "Value ≥ modulus"));
        }
        Ok(FieldElement(limbs))
    }

    /// Convert this field element into big-endian bytes.
    pub fn to_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        limbs_to_be_bytes(&self.0)
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::zero())
    }

    /// Least-significant bit as a `Choice`
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }

    /// (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = adc8(&self.0, &other.0);
        let (reduced, borrow) = sbb8(&sum, &Self::MOD_LIMBS);
        // Subtract p when the sum overflowed or is ≥ p
        let need_reduce = Choice::from((carry | (borrow ^ 1)) as u8);
        FieldElement(select8(&sum, &reduced, need_reduce))
    }

    /// (self - other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = sbb8(&self.0, &other.0);
        let (diff_plus_p, _) = adc8(&diff, &Self::MOD_LIMBS);
        FieldElement(select8(&diff, &diff_plus_p, Choice::from(borrow as u8)))
    }

    /// 2·self mod p
    #[inline(always)]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// -self mod p
    pub fn negate(&self) -> Self {
        Self::zero().sub(self)
    }

    /// (self · other) mod p, schoolbook 8×8 product then folding reduction
    pub fn mul(&self, other: &Self) -> Self {
        FieldElement(reduce_wide(
            &mul_wide(&self.0, &other.0),
            &Self::FOLD_LIMBS,
            &Self::MOD_LIMBS,
            3,
        ))
    }

    /// self² mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplicative inverse via Fermat: a^(p-2) mod p
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::DivisionByZero {
                context: "K256 FieldElement inversion",
            });
        }
        Ok(self.pow(&P_MINUS_2))
    }

    /// a^(p-2) without the zero check; zero maps to zero
    pub(crate) fn invert_or_zero(&self) -> Self {
        self.pow(&P_MINUS_2)
    }

    /// Square root using p ≡ 3 (mod 4): sqrt(a) = a^((p+1)/4)
    ///
    /// Returns `None` when `self` is not a quadratic residue.
    pub fn sqrt(&self) -> Option<Self> {
        let root = self.pow(&P_PLUS_1_DIV_4);
        if bool::from(root.square().ct_eq(self)) {
            Some(root)
        } else {
            None
        }
    }

    /// Left-to-right square-and-multiply with a public exponent
    fn pow(&self, exp_be: &[u8; 32]) -> Self {
        let mut result = FieldElement::one();
        for &byte in exp_be.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                if (byte >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement(select8(&a.0, &b.0, choice))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

/* ------------------------------------------------------------------------- */
/*  Limb helpers shared with the scalar field                                */
/* ------------------------------------------------------------------------- */

/// Big-endian bytes → little-endian limbs
#[inline(always)]
pub(crate) fn be_bytes_to_limbs(bytes: &[u8; 32]) -> [u32; NLIMBS] {
    let mut limbs = [0u32; NLIMBS];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let offset = (NLIMBS - 1 - i) * 4;
        *limb = u32::from_be_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ]);
    }
    limbs
}

/// Little-endian limbs → big-endian bytes
#[inline(always)]
pub(crate) fn limbs_to_be_bytes(limbs: &[u32; NLIMBS]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, &limb) in limbs.iter().enumerate() {
        let offset = (NLIMBS - 1 - i) * 4;
        out[offset..offset + 4].copy_from_slice(&limb.to_be_bytes());
    }
    out
}

/// 8-limb addition with carry out
#[inline(always)]
pub(crate) fn adc8(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
    let mut r = [0u32; NLIMBS];
    let mut carry = 0u64;
    for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
        let tmp = (a_limb as u64) + (b_limb as u64) + carry;
        *r_limb = tmp as u32;
        carry = tmp >> 32;
    }
    (r, carry as u32)
}

/// 8-limb subtraction with borrow out (1 iff a < b)
#[inline(always)]
pub(crate) fn sbb8(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
    let mut r = [0u32; NLIMBS];
    let mut borrow = 0u64;
    for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
        let tmp = (a_limb as u64)
            .wrapping_sub(b_limb as u64)
            .wrapping_sub(borrow);
        *r_limb = tmp as u32;
        borrow = (tmp >> 63) & 1;
    }
    (r, borrow as u32)
}

/// Constant-time select: `a` when `choice` is 0, `b` when 1
#[inline(always)]
pub(crate) fn select8(a: &[u32; NLIMBS], b: &[u32; NLIMBS], choice: Choice) -> [u32; NLIMBS] {
    let mut out = [0u32; NLIMBS];
    for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *out_limb = u32::conditional_select(a_limb, b_limb, choice);
    }
    out
}

/// 8×8 schoolbook product into 16 limbs
#[inline(always)]
pub(crate) fn mul_wide(a: &[u32; NLIMBS], b: &[u32; NLIMBS]) -> [u32; 2 * NLIMBS] {
    let mut t = [0u128; 2 * NLIMBS];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            t[i + j] += (ai as u128) * (bj as u128);
        }
    }
    let out = carry_propagate(&t);
    t.zeroize();
    out
}

#[inline(always)]
fn carry_propagate(t: &[u128; 2 * NLIMBS]) -> [u32; 2 * NLIMBS] {
    let mut out = [0u32; 2 * NLIMBS];
    let mut carry = 0u128;
    for (o, &v) in out.iter_mut().zip(t.iter()) {
        let v = v + carry;
        *o = v as u32;
        carry = v >> 32;
    }
    out
}

/// Reduce a 512-bit value modulo `m`, where `fold = 2^256 mod m`.
///
/// Each fold replaces `lo + hi·2^256` with `lo + hi·fold`. After `folds`
/// rounds the value is below 2^256 < 2m, so one conditional subtraction
/// yields the canonical residue. The fold count is fixed per modulus.
pub(crate) fn reduce_wide(
    wide: &[u32; 2 * NLIMBS],
    fold: &[u32],
    modulus: &[u32; NLIMBS],
    folds: usize,
) -> [u32; NLIMBS] {
    let mut w = *wide;
    for _ in 0..folds {
        let mut t = [0u128; 2 * NLIMBS];
        for (i, ti) in t.iter_mut().take(NLIMBS).enumerate() {
            *ti = w[i] as u128;
        }
        for j in 0..NLIMBS {
            let hi = w[NLIMBS + j] as u128;
            for (k, &c) in fold.iter().enumerate() {
                t[j + k] += hi * (c as u128);
            }
        }
        w = carry_propagate(&t);
        t.zeroize();
    }

    let mut lo = [0u32; NLIMBS];
    lo.copy_from_slice(&w[..NLIMBS]);
    let (mut reduced, borrow) = sbb8(&lo, modulus);
    let out = select8(&lo, &reduced, Choice::from((borrow ^ 1) as u8));
    w.zeroize();
    lo.zeroize();
    reduced.zeroize();
    out
}
