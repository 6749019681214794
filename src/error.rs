//! Error types for the DSS converter.
//!
//! This module provides a unified error type [`DssError`] that covers
//! all error conditions that can occur while parsing DSS text, lifting a
//! record tree, and reading or writing files.

use std::path::Path;

use thiserror::Error;

/// Result type alias using [`DssError`].
pub type Result<T> = std::result::Result<T, DssError>;

/// Unified error type for all DSS conversion operations.
#[derive(Error, Debug)]
pub enum DssError {
    // ============ Parsing Errors ============
    /// A token after the command tag is not a single `key=value` pair
    #[error("Error encountered in group (space delimited) #{group} of line {line}: {token:?}")]
    MalformedAttribute {
        line: usize,
        group: usize,
        token: String,
    },

    // ============ Lifting Errors ============
    /// A record is missing a field its shape requires
    #[error("Record '{command}' at line {line} is missing required field '{field}'")]
    MissingField {
        command: String,
        field: String,
        line: usize,
    },

    /// A required field is present but cannot be interpreted
    #[error("Record '{command}' at line {line} has malformed field '{field}': {message}")]
    MalformedField {
        command: String,
        field: String,
        line: usize,
        message: String,
    },

    // ============ I/O Errors ============
    /// Error reading or writing a file
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error serializing a lifted tree
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DssError {
    /// Create a malformed attribute error
    pub fn malformed_attribute(line: usize, group: usize, token: impl Into<String>) -> Self {
        Self::MalformedAttribute {
            line,
            group,
            token: token.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(command: impl Into<String>, field: impl Into<String>, line: usize) -> Self {
        Self::MissingField {
            command: command.into(),
            field: field.into(),
            line,
        }
    }

    /// Create a malformed field error
    pub fn malformed_field(
        command: impl Into<String>,
        field: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            command: command.into(),
            field: field.into(),
            line,
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the path it happened on
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
