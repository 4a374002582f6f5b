//! Error types for pattern construction
//!
//! This module provides error handling using the `thiserror` crate. Only
//! pattern construction is fallible: once a [`Pattern`](crate::Pattern)
//! exists, matching never returns an error. Asking a match for a capture
//! group outside the pattern's group count is a programmer error and panics
//! instead of going through this type.

use thiserror::Error;

/// The error produced when a pattern cannot be constructed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern text is not valid syntax under the given compile options
    #[error("invalid pattern `{pattern}`: {message}")]
    Syntax {
        /// The offending pattern text
        pattern: String,
        /// The engine's description of what went wrong
        message: String,
    },

    /// A persisted options bitmask contains bits this version does not know
    #[error("invalid compile options bits {bits:#x}")]
    InvalidOptions {
        /// The raw bitmask that failed to decode
        bits: u32,
    },
}

/// Result type alias for pattern construction
pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = PatternError::Syntax {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(err.to_string(), "invalid pattern `(`: unclosed group");
    }

    #[test]
    fn test_invalid_options_display() {
        let err = PatternError::InvalidOptions { bits: 0x1000 };
        assert_eq!(err.to_string(), "invalid compile options bits 0x1000");
    }
}
