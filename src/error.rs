//! # Error Types
//!
//! This module defines error types used throughout the linebar library.
//!
//! [`EncodeError`] covers everything an encoder can reject. [`LinebarError`]
//! wraps it together with the failures of the outer layers (rendering, CLI
//! configuration, HTTP server).

use thiserror::Error;

use crate::symbology::Symbology;

/// Rejection of an encode request.
///
/// Raised before any pattern is assembled, so a failed encode never yields
/// partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Input length is outside the range the symbology accepts
    #[error("{symbology} requires {expected} digits, got {actual}")]
    InvalidLength {
        symbology: Symbology,
        expected: &'static str,
        actual: usize,
    },

    /// Character has no entry in the symbology's table
    #[error("{symbology} cannot encode {character:?} at position {position}")]
    UnsupportedCharacter {
        symbology: Symbology,
        character: char,
        position: usize,
    },
}

/// Symbology name that matches none of the supported symbologies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown symbology '{0}' (expected one of: code128, ean13, upca, code39)")]
pub struct ParseSymbologyError(pub String);

/// Main error type for linebar operations
#[derive(Debug, Error)]
pub enum LinebarError {
    /// Encoding rejected the input
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Unrecognized symbology name
    #[error(transparent)]
    Symbology(#[from] ParseSymbologyError),

    /// Invalid render or server configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_message() {
        let err = EncodeError::InvalidLength {
            symbology: Symbology::Ean13,
            expected: "12 or 13",
            actual: 10,
        };
        assert_eq!(err.to_string(), "EAN-13 requires 12 or 13 digits, got 10");
    }

    #[test]
    fn test_encode_error_converts() {
        let err: LinebarError = EncodeError::UnsupportedCharacter {
            symbology: Symbology::Code39,
            character: '@',
            position: 3,
        }
        .into();
        assert!(matches!(err, LinebarError::Encode(_)));
        assert!(err.to_string().contains("'@'"));
    }
}
