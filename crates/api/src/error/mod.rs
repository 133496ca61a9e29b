//! Error handling for the coincrypt ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

#[cfg(feature = "std")]
impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0, // Unknown expected size
            actual: 0,   // Unknown actual size
        }
    }
}

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for key operations
pub type KeyResult<T> = Result<T>;
/// Result type for signature operations
pub type SignatureResult<T> = Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_keeps_kind() {
        let err = Error::SignatureParseFailed {
            context: "inner",
            reason: "bad tag",
        };
        let err = err.with_context("outer");
        assert_eq!(
            err,
            Error::SignatureParseFailed {
                context: "outer",
                reason: "bad tag"
            }
        );
        assert_eq!(err.context(), "outer");
    }

    #[test]
    fn test_result_ext_with_context() {
        let r: core::result::Result<(), Error> = Err(Error::DivisionByZero { context: "a" });
        let err = r.with_context("b").unwrap_err();
        assert_eq!(err, Error::DivisionByZero { context: "b" });
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display() {
        let err = Error::InsufficientBuffer {
            context: "DER",
            needed: 72,
            available: 10,
        };
        assert_eq!(err.to_string(), "DER: insufficient buffer (need 72, have 10)");
        let err = Error::InvalidPrivateKey {
            context: "secp256k1",
        };
        assert_eq!(err.to_string(), "Invalid private key: secp256k1");
    }
}
