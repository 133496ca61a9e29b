//! Constant values for coincrypt cryptographic operations
//!
//! Curve domain parameters and hash sizes shared across the workspace.

#![no_std]

pub mod traditional;
pub mod utils;
