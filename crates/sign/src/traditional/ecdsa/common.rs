//! Common utilities for ECDSA implementations
//!
//! The signature value and its two wire forms: strict ASN.1 DER
//! (`SEQUENCE { INTEGER r, INTEGER s }`) and the 64-byte compact `r || s`.

use coincrypt_api::{error::Error as ApiError, Result as ApiResult};
use coincrypt_params::traditional::ecdsa::{
    SECP256K1_COMPACT_SIGNATURE_SIZE, SECP256K1_DER_SIGNATURE_MAX_SIZE,
};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Size of each signature component in bytes
pub const COMPONENT_SIZE: usize = 32;

const DER_SEQUENCE: u8 = 0x30;
const DER_INTEGER: u8 = 0x02;

/// ECDSA signature components (r, s) with an optional recovery id
///
/// `r` and `s` are 32-byte big-endian integers. The recovery id is not part
/// of either wire form, so equality only compares `(r, s)`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    r: [u8; COMPONENT_SIZE],
    s: [u8; COMPONENT_SIZE],
    recovery_id: Option<u8>,
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.s == other.s
    }
}

impl Eq for Signature {}

impl Signature {
    /// Build a signature from its components, without a recovery id
    pub fn new(r: [u8; COMPONENT_SIZE], s: [u8; COMPONENT_SIZE]) -> Self {
        Signature {
            r,
            s,
            recovery_id: None,
        }
    }

    /// Attach a recovery id
    pub fn with_recovery_id(mut self, recovery_id: u8) -> Self {
        self.recovery_id = Some(recovery_id);
        self
    }

    /// The r component
    pub fn r(&self) -> &[u8; COMPONENT_SIZE] {
        &self.r
    }

    /// The s component
    pub fn s(&self) -> &[u8; COMPONENT_SIZE] {
        &self.s
    }

    /// Recovery id in `0..=3`, when the signature was produced locally
    pub fn recovery_id(&self) -> Option<u8> {
        self.recovery_id
    }

    /// Exact length of the DER encoding
    pub fn der_len(&self) -> usize {
        2 + 2 + integer_len(&self.r) + 2 + integer_len(&self.s)
    }

    /// Write the DER encoding into `out`, returning the number of bytes used
    pub fn encode_der_into(&self, out: &mut [u8]) -> ApiResult<usize> {
        let needed = self.der_len();
        if out.len() < needed {
            return Err(ApiError::InsufficientBuffer {
                context: "ECDSA DER encoding",
                needed,
                available: out.len(),
            });
        }

        out[0] = DER_SEQUENCE;
        out[1] = (needed - 2) as u8;
        let mut pos = 2;
        pos += write_integer(&mut out[pos..], &self.r);
        pos += write_integer(&mut out[pos..], &self.s);
        Ok(pos)
    }

    /// Serialize signature to DER format
    #[cfg(feature = "alloc")]
    pub fn to_der(&self) -> Vec<u8> {
        let mut buf = [0u8; SECP256K1_DER_SIGNATURE_MAX_SIZE];
        // 72 bytes always hold two 33-byte integers plus headers
        let len = self.encode_der_into(&mut buf).unwrap_or(0);
        buf[..len].to_vec()
    }

    /// Parse signature from strict DER format
    ///
    /// Rejects anything BER would tolerate but DER forbids: long-form
    /// lengths, padding zeros, negative integers and trailing data.
    pub fn from_der(der: &[u8]) -> ApiResult<Self> {
        if der.len() < 2 {
            return Err(parse_error("DER signature too short"));
        }
        if der[0] != DER_SEQUENCE {
            return Err(parse_error("invalid DER SEQUENCE tag"));
        }
        let seq_len = der[1];
        if seq_len & 0x80 != 0 {
            return Err(parse_error("long-form length not allowed"));
        }
        let end = 2 + seq_len as usize;
        if end > der.len() {
            return Err(parse_error("SEQUENCE length exceeds input"));
        }
        if end < der.len() {
            return Err(parse_error("trailing bytes after SEQUENCE"));
        }

        let mut pos = 2;
        let r = read_integer(der, &mut pos, end)?;
        let s = read_integer(der, &mut pos, end)?;
        if pos != end {
            return Err(parse_error("trailing bytes inside SEQUENCE"));
        }

        Ok(Signature::new(r, s))
    }

    /// Compact 64-byte form `r || s`
    pub fn to_compact(&self) -> [u8; SECP256K1_COMPACT_SIGNATURE_SIZE] {
        let mut out = [0u8; SECP256K1_COMPACT_SIGNATURE_SIZE];
        out[..COMPONENT_SIZE].copy_from_slice(&self.r);
        out[COMPONENT_SIZE..].copy_from_slice(&self.s);
        out
    }

    /// Parse the compact 64-byte form
    pub fn from_compact(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != SECP256K1_COMPACT_SIGNATURE_SIZE {
            return Err(ApiError::InvalidLength {
                context: "ECDSA compact signature",
                expected: SECP256K1_COMPACT_SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut r = [0u8; COMPONENT_SIZE];
        let mut s = [0u8; COMPONENT_SIZE];
        r.copy_from_slice(&bytes[..COMPONENT_SIZE]);
        s.copy_from_slice(&bytes[COMPONENT_SIZE..]);
        Ok(Signature::new(r, s))
    }
}

fn parse_error(reason: &'static str) -> ApiError {
    ApiError::SignatureParseFailed {
        context: "ECDSA DER parsing",
        reason,
    }
}

/// Minimal big-endian magnitude; zero keeps a single byte
fn minimal_bytes(value: &[u8; COMPONENT_SIZE]) -> &[u8] {
    let first = value
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(COMPONENT_SIZE - 1);
    &value[first..]
}

/// Content length of the DER INTEGER for `value`
fn integer_len(value: &[u8; COMPONENT_SIZE]) -> usize {
    let bytes = minimal_bytes(value);
    bytes.len() + usize::from(bytes[0] & 0x80 != 0)
}

fn write_integer(out: &mut [u8], value: &[u8; COMPONENT_SIZE]) -> usize {
    let bytes = minimal_bytes(value);
    let len = integer_len(value);
    out[0] = DER_INTEGER;
    out[1] = len as u8;
    let mut pos = 2;
    if len > bytes.len() {
        out[pos] = 0x00;
        pos += 1;
    }
    out[pos..pos + bytes.len()].copy_from_slice(bytes);
    pos + bytes.len()
}

fn read_integer(der: &[u8], pos: &mut usize, end: usize) -> ApiResult<[u8; COMPONENT_SIZE]> {
    if *pos + 2 > end {
        return Err(parse_error("truncated INTEGER header"));
    }
    if der[*pos] != DER_INTEGER {
        return Err(parse_error("invalid DER INTEGER tag"));
    }
    let len_byte = der[*pos + 1];
    if len_byte & 0x80 != 0 {
        return Err(parse_error("long-form length not allowed"));
    }
    let len = len_byte as usize;
    let start = *pos + 2;
    if len == 0 {
        return Err(parse_error("empty INTEGER"));
    }
    if start + len > end {
        return Err(parse_error("INTEGER length exceeds SEQUENCE"));
    }

    let content = &der[start..start + len];
    if content[0] & 0x80 != 0 {
        return Err(parse_error("negative INTEGER"));
    }
    if len > 1 && content[0] == 0x00 && content[1] & 0x80 == 0 {
        return Err(parse_error("non-minimal INTEGER encoding"));
    }

    let magnitude = if content[0] == 0x00 && len > 1 {
        &content[1..]
    } else {
        content
    };
    if magnitude.len() > COMPONENT_SIZE {
        return Err(parse_error("INTEGER wider than 32 bytes"));
    }

    let mut out = [0u8; COMPONENT_SIZE];
    out[COMPONENT_SIZE - magnitude.len()..].copy_from_slice(magnitude);
    *pos = start + len;
    Ok(out)
}
