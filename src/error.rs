//! Custom error types for jciphers
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::TextField;

/// The main error type for jciphers operations
#[derive(Error, Debug)]
pub enum CipherError {
    /// A digit was found in a message or key
    #[error("Numbers are not supported in your {field}.")]
    UnsupportedDigit { field: TextField, character: char },

    /// A non-Latin, non-space, non-punctuation character was found
    #[error(
        "Unsupported character in {field}: {character}. Only Latin characters are supported at this time."
    )]
    UnsupportedCharacter { field: TextField, character: char },

    /// A cipher parameter is out of range or malformed
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Standard input was closed while waiting for an answer
    #[error("Input closed")]
    InputClosed,
}

impl CipherError {
    /// Create an "invalid parameter" error
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter(reason.into())
    }

    /// Check if this error was raised while validating raw text
    pub fn is_unsupported_character(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedDigit { .. } | Self::UnsupportedCharacter { .. }
        )
    }

    /// Check if this is an invalid parameter error
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

impl From<std::io::Error> for CipherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CipherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for jciphers operations
pub type CipherResult<T> = Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_error_display() {
        let err = CipherError::UnsupportedDigit {
            field: TextField::Message,
            character: '1',
        };
        assert_eq!(err.to_string(), "Numbers are not supported in your message.");
        assert!(err.is_unsupported_character());
    }

    #[test]
    fn test_character_error_display() {
        let err = CipherError::UnsupportedCharacter {
            field: TextField::Key,
            character: 'Ë',
        };
        assert_eq!(
            err.to_string(),
            "Unsupported character in key: Ë. Only Latin characters are supported at this time."
        );
        assert!(err.is_unsupported_character());
        assert!(!err.is_invalid_parameter());
    }

    #[test]
    fn test_invalid_parameter() {
        let err = CipherError::invalid_parameter("shift must be between 1 and 25");
        assert_eq!(
            err.to_string(),
            "Invalid parameter: shift must be between 1 and 25"
        );
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cipher_err: CipherError = io_err.into();
        assert!(matches!(cipher_err, CipherError::Io(_)));
    }
}
