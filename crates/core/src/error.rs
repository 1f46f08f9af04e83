//! Error types for the value codecs
//!
//! Every decode failure surfaces as a [`CodecError`]. The store wraps these
//! in its own error type together with the offending key.

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while decoding a value from its textual form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Text does not fully parse as the requested numeric kind
    #[error("Invalid {kind} value: {text:?}")]
    InvalidNumber {
        /// Type tag of the requested kind (`int` or `float`)
        kind: &'static str,
        /// Offending text
        text: String,
    },

    /// List text is not wrapped in `[` and `]`
    #[error("Invalid list format: {0}")]
    InvalidListFormat(String),

    /// Map text is not wrapped in `{` and `}` (strict parsing only)
    #[error("Invalid map format: {0}")]
    InvalidMapFormat(String),

    /// Map piece lacks a `key:value` structure (strict parsing only)
    #[error("Invalid map entry: {0:?}")]
    InvalidMapEntry(String),

    /// Opening bracket without the matching closing bracket
    #[error("Mismatched brackets in value: {0}")]
    MismatchedBrackets(String),

    /// Opening quote without the matching closing quote
    #[error("Mismatched quotes in string: {0}")]
    MismatchedQuotes(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_number() {
        let err = CodecError::InvalidNumber {
            kind: "int",
            text: "thirty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid int value"));
        assert!(msg.contains("thirty"));
    }

    #[test]
    fn test_error_display_list_format() {
        let err = CodecError::InvalidListFormat("a,b".to_string());
        assert_eq!(err.to_string(), "Invalid list format: a,b");
    }

    #[test]
    fn test_error_display_mismatched() {
        let err = CodecError::MismatchedBrackets("[a,b".to_string());
        assert_eq!(err.to_string(), "Mismatched brackets in value: [a,b");

        let err = CodecError::MismatchedQuotes("\"abc".to_string());
        assert_eq!(err.to_string(), "Mismatched quotes in string: \"abc");
    }

    #[test]
    fn test_error_pattern_matching() {
        let err = CodecError::InvalidNumber {
            kind: "float",
            text: "1.5x".to_string(),
        };

        match err {
            CodecError::InvalidNumber { kind, text } => {
                assert_eq!(kind, "float");
                assert_eq!(text, "1.5x");
            }
            _ => panic!("Wrong error variant"),
        }
    }
}
