//! Constant-time helpers shared by the coincrypt crates
//!
//! Re-exported from the facade as `coincrypt::internal` for callers that
//! compare or select secret-dependent values themselves.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, ct_select};
