//! Public API traits and types for the coincrypt library
//!
//! This crate provides the public API surface for the coincrypt workspace:
//! the error type shared by every crate, the `Signature` trait implemented by
//! signature schemes, and the `HashSuite` capability consumed by the
//! elliptic-curve engine.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod traits;

pub use error::{Error, Result, ResultExt};
pub use traits::{HashSuite, Signature};
