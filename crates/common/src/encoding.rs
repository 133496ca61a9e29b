//! Hexadecimal encoding helpers

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use coincrypt_api::{Error, Result};

/// Encode bytes as a lowercase hexadecimal string
pub fn hex_encode(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a hexadecimal string (either case) into bytes
///
/// Fails with `HexDecodeFailed` on odd length or a non-hex character.
pub fn hex_decode(s: &str) -> Result<Vec<u8>> {
    hex::decode(s).map_err(|e| Error::HexDecodeFailed {
        context: "hex decode",
        reason: match e {
            hex::FromHexError::OddLength => "odd number of digits",
            hex::FromHexError::InvalidHexCharacter { .. } => "invalid hex character",
            hex::FromHexError::InvalidStringLength => "invalid string length",
        },
    })
}
