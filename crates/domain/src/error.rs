//! Error types for the domain crate.
//!
//! Only catalog loading can fail. Predicates, units and gear are
//! infallible and never produce these errors.

use thiserror::Error;

/// Errors that can occur while loading or building a product catalog.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Catalog file could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a catalog file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had a value outside its fixed set (unknown color, size, ...)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Two products in one catalog share a name
    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DomainError>;
