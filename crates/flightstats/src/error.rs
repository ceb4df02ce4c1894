//! Error types for the flightstats library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for flightstats operations.
#[derive(Debug, Error)]
pub enum FlightError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A passengers value could not be read as a non-negative integer.
    #[error("Parse error at line {line}, column '{column}': {message} (value: '{value}')")]
    Parse {
        line: u64,
        column: String,
        value: String,
        message: String,
    },

    /// A required column is not named in the header row.
    #[error("Missing required column: '{column}'")]
    MissingColumn { column: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Reading a menu choice or writing a prompt failed.
    #[error("Console error: {0}")]
    Console(#[source] std::io::Error),

    /// A renderer could not display a request.
    #[error("Render error: {0}")]
    Render(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for flightstats operations.
pub type Result<T> = std::result::Result<T, FlightError>;
