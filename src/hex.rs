//! Lowercase hexadecimal encoding

pub use coincrypt_common::encoding::{hex_decode as decode, hex_encode as encode};
