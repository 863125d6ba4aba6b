//! Error types for stylecfg.
//!
//! Uses thiserror for derive macros. Loading either yields a complete,
//! valid document or one of these errors; there is no partial success.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for stylecfg operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Bad arguments, unreadable or unwritable files.
    #[error("{0}")]
    UserError(String),

    /// The source is not a well-formed nested key/value structure.
    #[error("parse error: {0}")]
    ParseError(String),

    /// A value is well-formed but semantically invalid.
    #[error("validation failed at '{path}': {message}")]
    ValidationError {
        /// Dotted key path of the offending value (e.g. `theme.colors.primary.500`).
        path: String,
        message: String,
    },
}

impl StyleError {
    /// Build a validation error for the value at `path`.
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        StyleError::ValidationError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Build a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        StyleError::ParseError(message.into())
    }

    /// Re-anchor a validation error produced for a bare value under `path`.
    ///
    /// Leaf parsers (hex, offsets, shorthands) do not know where their input
    /// came from; the loader calls this to report the full key path.
    pub fn at(self, path: &str) -> Self {
        match self {
            StyleError::ValidationError { path: inner, message } if inner.is_empty() => {
                StyleError::ValidationError {
                    path: path.to_string(),
                    message,
                }
            }
            other => other,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StyleError::UserError(_) => exit_codes::USER_ERROR,
            StyleError::ParseError(_) => exit_codes::PARSE_FAILURE,
            StyleError::ValidationError { .. } => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for stylecfg operations.
pub type Result<T> = std::result::Result<T, StyleError>;
