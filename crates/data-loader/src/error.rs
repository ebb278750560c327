//! Error types for the data-loader crate.
//!
//! Every failure at the ingestion boundary is fatal for the run: there is
//! no skipping of bad lines and no partial recovery. The variants carry
//! enough context (line number, offending token) to point at the input.

use thiserror::Error;

/// Errors that can occur while ingesting a rating stream
///
/// The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the stream
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the input couldn't be parsed
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// A field had a value that can't be used (e.g. a NaN score)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of tokens in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// A user or item id outside of the declared range
    #[error("{entity} id {id} is out of range (expected < {bound})")]
    IdOutOfRange {
        entity: &'static str,
        id: u32,
        bound: usize,
    },

    /// The stream ended before all declared ratings were read
    #[error("Expected {expected} ratings but the input ended after {found}")]
    MissingRatings { expected: usize, found: usize },

    /// Generic validation failure
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
