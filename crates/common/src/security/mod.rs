//! Security primitives and memory safety utilities
//!
//! Every type here clears its contents when dropped, so secrets do not
//! outlive the operation that needed them.

pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
