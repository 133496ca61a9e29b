//! Error type definitions for coincrypt operations

/// Primary error type for coincrypt operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Private key is zero or not below the group order
    InvalidPrivateKey {
        context: &'static str,
    },

    /// Point is off the curve, the identity where a key is required, or
    /// its encoding is malformed
    InvalidPoint {
        context: &'static str,
        reason: &'static str,
    },

    /// Modular inverse of zero
    DivisionByZero {
        context: &'static str,
    },

    /// Signing produced r = 0 or s = 0, or no valid nonce could be derived
    SignFailed {
        context: &'static str,
        reason: &'static str,
    },

    /// Output buffer too small for the encoded value
    InsufficientBuffer {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// Malformed DER signature
    SignatureParseFailed {
        context: &'static str,
        reason: &'static str,
    },

    /// Malformed hexadecimal string
    HexDecodeFailed {
        context: &'static str,
        reason: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        reason: &'static str,
    },

    /// Other error
    Other {
        context: &'static str,
        reason: &'static str,
    },
}

/// Result type for coincrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidPrivateKey { .. } => Self::InvalidPrivateKey { context },
            Self::InvalidPoint { reason, .. } => Self::InvalidPoint { context, reason },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::SignFailed { reason, .. } => Self::SignFailed { context, reason },
            Self::InsufficientBuffer {
                needed, available, ..
            } => Self::InsufficientBuffer {
                context,
                needed,
                available,
            },
            Self::SignatureParseFailed { reason, .. } => {
                Self::SignatureParseFailed { context, reason }
            }
            Self::HexDecodeFailed { reason, .. } => Self::HexDecodeFailed { context, reason },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
            Self::Other { reason, .. } => Self::Other { context, reason },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidPrivateKey { context }
            | Self::InvalidPoint { context, .. }
            | Self::DivisionByZero { context }
            | Self::SignFailed { context, .. }
            | Self::InsufficientBuffer { context, .. }
            | Self::SignatureParseFailed { context, .. }
            | Self::HexDecodeFailed { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidPrivateKey { context } => {
                write!(f, "Invalid private key: {}", context)
            }
            Self::InvalidPoint { context, reason } => {
                write!(f, "Invalid point: {}: {}", context, reason)
            }
            Self::DivisionByZero { context } => {
                write!(f, "Division by zero: {}", context)
            }
            Self::SignFailed { context, reason } => {
                write!(f, "Signing failed: {}: {}", context, reason)
            }
            Self::InsufficientBuffer {
                context,
                needed,
                available,
            } => {
                write!(
                    f,
                    "{}: insufficient buffer (need {}, have {})",
                    context, needed, available
                )
            }
            Self::SignatureParseFailed { context, reason } => {
                write!(f, "Signature parse failed: {}: {}", context, reason)
            }
            Self::HexDecodeFailed { context, reason } => {
                write!(f, "Hex decode failed: {}: {}", context, reason)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, reason } => {
                write!(f, "{}: {}", context, reason)
            }
            Self::Other { context, reason } => {
                write!(f, "{}: {}", context, reason)
            }
        }
    }
}
