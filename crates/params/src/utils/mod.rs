//! Constants for auxiliary primitives

pub mod hash;
