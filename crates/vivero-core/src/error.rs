//! Error types for vivero.

use thiserror::Error;

/// Result type alias using vivero's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for vivero operations.
///
/// The filtering and scoring pipeline itself is total and never returns
/// errors; this type covers the boundaries around it (row normalization,
/// configuration parsing, serialization).
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input (malformed row, unusable value)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
