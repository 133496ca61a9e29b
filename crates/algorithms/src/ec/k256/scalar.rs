//! secp256k1 scalar arithmetic operations
//!
//! Integers modulo the group order n, stored big-endian inside a
//! `SecretBuffer` and wiped on drop. Arithmetic converts to little-endian
//! limbs and reuses the field module's branch-free helpers.

use crate::ec::k256::constants::{K256_SCALAR_SIZE, NLIMBS};
use crate::ec::k256::field::{
    adc8, be_bytes_to_limbs, limbs_to_be_bytes, mul_wide, reduce_wide, sbb8, select8,
};
use crate::error::{validate, Error, Result};
use coincrypt_common::security::{EphemeralSecret, SecretBuffer};
use coincrypt_params::traditional::ecdsa::SECP256K1;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// secp256k1 scalar value for use in elliptic curve operations
///
/// Represents integers modulo the curve order n. Used for private keys,
/// nonces and signature components.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<K256_SCALAR_SIZE>);

impl Scalar {
    /// n, little-endian limbs
    const N_LIMBS: [u32; NLIMBS] = [
        0xD036_4141,
        0xBFD2_5E8C,
        0xAF48_A03B,
        0xBAAE_DCE6,
        0xFFFF_FFFE,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
    ];

    /// floor(n / 2), little-endian limbs
    const HALF_N_LIMBS: [u32; NLIMBS] = [
        0x681B_20A0,
        0xDFE9_2F46,
        0x57A4_501D,
        0x5D57_6E73,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x7FFF_FFFF,
    ];

    /// 2^256 - n
    const FOLD_LIMBS: [u32; 5] = [0x2FC9_BEBF, 0x402D_A173, 0x50B7_5FC4, 0x4551_2319, 0x0000_0001];

    /// Create a new scalar from raw bytes.
    ///
    /// The bytes are reduced modulo the curve order. A literal all-zero input
    /// is rejected; a non-zero multiple of n reduces to zero and is accepted.
    pub fn new(data: [u8; K256_SCALAR_SIZE]) -> Result<Self> {
        if data.iter().all(|&b| b == 0) {
            return Err(Error::param("K256 Scalar", "Scalar cannot be zero"));
        }
        Ok(Self::reduce(&data))
    }

    /// Strict constructor for private keys: `1 ≤ value < n`, no reduction.
    pub fn from_bytes_checked(bytes: &[u8; K256_SCALAR_SIZE]) -> Result<Self> {
        let limbs = EphemeralSecret::new(be_bytes_to_limbs(bytes));
        let (mut diff, borrow) = sbb8(&limbs, &Self::N_LIMBS);
        diff.zeroize();
        let in_range = Choice::from(borrow as u8);
        let non_zero = !limbs[..].ct_eq(&[0u32; NLIMBS][..]);
        if !bool::from(in_range & non_zero) {
            return Err(Error::InvalidPrivateKey {
                context: "K256 Scalar",
            });
        }
        Ok(Scalar(SecretBuffer::new(*bytes)))
    }

    /// Reduce any 256-bit big-endian value modulo n. Zero is allowed.
    pub fn reduce(bytes: &[u8; K256_SCALAR_SIZE]) -> Self {
        let limbs = EphemeralSecret::new(be_bytes_to_limbs(bytes));
        // Any 256-bit value is below 2n, so one conditional subtraction suffices
        let (reduced, borrow) = sbb8(&limbs, &Self::N_LIMBS);
        let reduced = EphemeralSecret::new(reduced);
        Self::from_limbs(select8(&limbs, &reduced, Choice::from((borrow ^ 1) as u8)))
    }

    /// Deserialize a scalar from a byte slice with strict range checking
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("K256 Scalar", bytes.len(), K256_SCALAR_SIZE)?;
        let mut scalar_bytes = [0u8; K256_SCALAR_SIZE];
        scalar_bytes.copy_from_slice(bytes);
        let result = Self::from_bytes_checked(&scalar_bytes);
        scalar_bytes.zeroize();
        result
    }

    /// The scalar zero
    pub fn zero() -> Self {
        Scalar(SecretBuffer::zeroed())
    }

    /// The scalar one
    pub fn one() -> Self {
        let mut bytes = [0u8; K256_SCALAR_SIZE];
        bytes[K256_SCALAR_SIZE - 1] = 1;
        Scalar(SecretBuffer::new(bytes))
    }

    /// Create a scalar from a `SecretBuffer`, reducing modulo n.
    pub fn from_secret_buffer(buffer: SecretBuffer<K256_SCALAR_SIZE>) -> Self {
        let mut bytes = buffer.to_array();
        let s = Self::reduce(&bytes);
        bytes.zeroize();
        s
    }

    /// Get a reference to the underlying `SecretBuffer`.
    pub fn as_secret_buffer(&self) -> &SecretBuffer<K256_SCALAR_SIZE> {
        &self.0
    }

    /// Serialize this scalar to big-endian bytes.
    pub fn serialize(&self) -> [u8; K256_SCALAR_SIZE] {
        self.0.to_array()
    }

    /// Check if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        bool::from(self.0.as_slice().ct_eq(&[0u8; K256_SCALAR_SIZE][..]))
    }

    /// True when the value exceeds floor(n / 2)
    pub fn is_high(&self) -> Choice {
        let (mut diff, borrow) = sbb8(&Self::HALF_N_LIMBS, &self.limbs());
        diff.zeroize();
        Choice::from(borrow as u8)
    }

    /// (self + other) mod n
    pub fn add_mod_n(&self, other: &Self) -> Self {
        let (sum, carry) = adc8(&self.limbs(), &other.limbs());
        let sum = EphemeralSecret::new(sum);
        let (reduced, borrow) = sbb8(&sum, &Self::N_LIMBS);
        let reduced = EphemeralSecret::new(reduced);
        let need_reduce = Choice::from((carry | (borrow ^ 1)) as u8);
        Self::from_limbs(select8(&sum, &reduced, need_reduce))
    }

    /// (self - other) mod n
    pub fn sub_mod_n(&self, other: &Self) -> Self {
        let (diff, borrow) = sbb8(&self.limbs(), &other.limbs());
        let diff = EphemeralSecret::new(diff);
        let (diff_plus_n, _) = adc8(&diff, &Self::N_LIMBS);
        let diff_plus_n = EphemeralSecret::new(diff_plus_n);
        Self::from_limbs(select8(&diff, &diff_plus_n, Choice::from(borrow as u8)))
    }

    /// (self · other) mod n
    pub fn mul_mod_n(&self, other: &Self) -> Self {
        let wide = EphemeralSecret::new(mul_wide(&self.limbs(), &other.limbs()));
        Self::from_limbs(reduce_wide(&wide, &Self::FOLD_LIMBS, &Self::N_LIMBS, 4))
    }

    /// Multiplicative inverse modulo n via Fermat: a^(n-2)
    ///
    /// The exponent is public, so the square-and-multiply schedule does not
    /// depend on `self`.
    pub fn inv_mod_n(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero {
                context: "K256 Scalar inversion",
            });
        }

        // n - 2; the low byte of n is 0x41 so no borrow propagates
        let mut exp = SECP256K1.n;
        exp[K256_SCALAR_SIZE - 1] -= 2;

        let mut result = Self::one();
        for byte in exp {
            for bit in (0..8).rev() {
                result = result.mul_mod_n(&result);
                if (byte >> bit) & 1 == 1 {
                    result = result.mul_mod_n(self);
                }
            }
        }
        Ok(result)
    }

    /// -self mod n; zero stays zero
    pub fn negate(&self) -> Self {
        Self::zero().sub_mod_n(self)
    }

    /// Constant-time select: `a` when `choice` is 0, `b` when 1
    pub fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u8; K256_SCALAR_SIZE];
        for ((o, x), y) in out
            .iter_mut()
            .zip(a.0.as_slice().iter())
            .zip(b.0.as_slice().iter())
        {
            *o = u8::conditional_select(x, y, choice);
        }
        let s = Scalar(SecretBuffer::new(out));
        out.zeroize();
        s
    }

    /// Bit `i` (0 = least significant) as a `Choice`
    pub(crate) fn bit(&self, i: usize) -> Choice {
        let byte = self.0.as_slice()[K256_SCALAR_SIZE - 1 - i / 8];
        Choice::from((byte >> (i % 8)) & 1)
    }

    /// Little-endian limbs, wiped when the returned value is dropped
    pub(crate) fn limbs(&self) -> EphemeralSecret<[u32; NLIMBS]> {
        let mut bytes = self.0.to_array();
        let limbs = EphemeralSecret::new(be_bytes_to_limbs(&bytes));
        bytes.zeroize();
        limbs
    }

    /// Build a scalar from canonical limbs, consuming and wiping them
    fn from_limbs(mut limbs: [u32; NLIMBS]) -> Self {
        let mut bytes = limbs_to_be_bytes(&limbs);
        let s = Scalar(SecretBuffer::new(bytes));
        bytes.zeroize();
        limbs.zeroize();
        s
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        coincrypt_internal::constant_time::ct_eq_choice(self.0.as_slice(), other.0.as_slice())
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}
