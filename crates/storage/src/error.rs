//! Error types for the store
//!
//! `get`/`has`/`remove` never fail; every error here comes from `persist`,
//! `load` or configuration loading.

use std::io;
use std::path::PathBuf;

use qeivau_core::CodecError;
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error types for the store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Path cannot be opened for reading or writing
    #[error("Could not open file {}: {source}", path.display())]
    FileOpen {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Line lacks the `key:type=value` structure
    #[error("Malformed line {line}: {content}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// Line text
        content: String,
    },

    /// Declared type tag disagrees with the store's value kind
    #[error("Type mismatch for key '{key}': expected '{expected}', got '{found}'")]
    TypeMismatch {
        /// Key on the offending line
        key: String,
        /// Tag(s) the store accepts
        expected: String,
        /// Tag found in the file
        found: String,
    },

    /// Value text does not parse per its declared kind
    #[error("Deserialization error for key '{key}': {source}")]
    Deserialization {
        /// Key on the offending line
        key: String,
        /// Codec failure
        #[source]
        source: CodecError,
    },

    /// Key portion of a line is empty, or an empty key is being persisted
    #[error("Empty key on line {line}")]
    KeyEmpty {
        /// 1-based line number; 0 when raised by `persist`
        line: usize,
    },

    /// Key would produce a line that cannot be loaded back
    #[error("Cannot persist key {0:?}: key must not contain ':', '=' or line breaks")]
    InvalidKey(String),

    /// Encoded value spans more than one line
    #[error("Cannot persist value for key '{0}': encoded value contains a line break")]
    InvalidValue(String),

    /// I/O error after the file was opened
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_open() {
        let err = StoreError::FileOpen {
            path: PathBuf::from("non_existent_file.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Could not open file non_existent_file.txt"));
    }

    #[test]
    fn test_error_display_malformed() {
        let err = StoreError::MalformedLine {
            line: 1,
            content: "invalid=nonsense".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed line 1: invalid=nonsense");
    }

    #[test]
    fn test_error_display_type_mismatch() {
        let err = StoreError::TypeMismatch {
            key: "foo".to_string(),
            expected: "list".to_string(),
            found: "int".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch for key 'foo': expected 'list', got 'int'"
        );
    }

    #[test]
    fn test_error_display_deserialization() {
        let err = StoreError::Deserialization {
            key: "age".to_string(),
            source: CodecError::InvalidNumber {
                kind: "int",
                text: "thirty".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("key 'age'"));
        assert!(msg.contains("thirty"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err = StoreError::Deserialization {
            key: "k".to_string(),
            source: CodecError::InvalidListFormat("x".to_string()),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: StoreError = io_err.into();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
