//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing extracts and reports.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create or write a file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON serialization failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// There is nothing to write.
    #[error("no processed data to write for {path}")]
    NoRecords { path: PathBuf },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
