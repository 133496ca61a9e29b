//! Constants for the ECDSA curve

/// Short Weierstrass curve domain parameters, all values big-endian
pub struct CurveParams {
    /// The prime p defining the finite field F_p
    pub p: [u8; 32],

    /// The coefficient a in y^2 = x^3 + ax + b
    pub a: [u8; 32],

    /// The coefficient b in y^2 = x^3 + ax + b
    pub b: [u8; 32],

    /// The x-coordinate of the base point G
    pub g_x: [u8; 32],

    /// The y-coordinate of the base point G
    pub g_y: [u8; 32],

    /// The order n of the base point G
    pub n: [u8; 32],

    /// floor(n / 2), the low-s bound
    pub half_n: [u8; 32],

    /// The cofactor h
    pub h: u32,
}

/// secp256k1: y^2 = x^3 + 7 over F_p, p = 2^256 - 2^32 - 977
pub const SECP256K1: CurveParams = CurveParams {
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF,
        0xFC, 0x2F,
    ],
    a: [0u8; 32],
    b: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x07,
    ],
    g_x: [
        0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B,
        0x07, 0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8,
        0x17, 0x98,
    ],
    g_y: [
        0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08,
        0xA8, 0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10,
        0xD4, 0xB8,
    ],
    n: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
        0x41, 0x41,
    ],
    half_n: [
        0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B,
        0x20, 0xA0,
    ],
    h: 1,
};

/// Size of a secp256k1 private key in bytes
pub const SECP256K1_PRIVATE_KEY_SIZE: usize = 32;

/// Size of a compressed SEC1 public key in bytes
pub const SECP256K1_PUBLIC_KEY_COMPRESSED_SIZE: usize = 33;

/// Size of an uncompressed SEC1 public key in bytes
pub const SECP256K1_PUBLIC_KEY_UNCOMPRESSED_SIZE: usize = 65;

/// Upper bound on the DER encoding of a secp256k1 signature
pub const SECP256K1_DER_SIGNATURE_MAX_SIZE: usize = 72;

/// Size of a compact `r || s` signature
pub const SECP256K1_COMPACT_SIGNATURE_SIZE: usize = 64;
