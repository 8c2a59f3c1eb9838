//! Error types for carshop

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a stored line cannot be turned back into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {field}: {value:?} is not a valid integer")]
    InvalidInteger { field: &'static str, value: String },

    #[error("line is not valid UTF-8")]
    InvalidEncoding,

    #[error("invalid production date {0:?} (expected DD.MM.YYYY)")]
    InvalidDate(String),

    #[error("unknown fuel type {0:?} (expected GASOLINE, DIESEL, HYBRID or ELECTRIC)")]
    UnknownFuelType(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{operation} failed at line {line}: {source}")]
    Format {
        operation: &'static str,
        line: usize,
        #[source]
        source: FormatError,
    },

    #[error("A car with ID {0} already exists")]
    DuplicateKey(i32),

    #[error("Production date {0} is out of range (year must be between 0 and 9999)")]
    DateOutOfRange(chrono::NaiveDate),

    #[error("Car with ID {0} not found")]
    NotFound(i32),

    #[error("{operation} failed for {}: {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl Error {
    /// Wrap an I/O failure with the operation and path it happened on
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
