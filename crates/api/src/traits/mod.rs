//! Traits implemented by coincrypt algorithms

pub mod hash_suite;
pub mod signature;

pub use hash_suite::HashSuite;
pub use signature::Signature;
