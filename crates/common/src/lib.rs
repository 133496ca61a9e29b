//! Common implementations and shared functionality for the coincrypt library
//!
//! Secret-scoped memory wrappers used by the arithmetic and signing crates,
//! plus the hexadecimal helper exposed through the facade.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod encoding;
pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
