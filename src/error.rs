//! Error types for unresume library.
//!
//! Extraction itself never fails: missing evidence is reported as empty
//! fields. Errors only surface at the edges, when loading keyword tables or
//! serializing records.

use std::io;
use thiserror::Error;

/// Result type alias for unresume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring or rendering extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The keyword registry contains an unusable entry.
    #[error("Invalid keyword registry: {0}")]
    InvalidRegistry(String),

    /// Error during rendering (JSON, CSV, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::InvalidRegistry(format!("keyword pattern does not compile: {}", err))
    }
}
