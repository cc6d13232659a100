//! Error types for source ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Format Errors ===
    /// File starts with a byte order mark of an unsupported encoding.
    #[error("unsupported encoding {encoding} in {path}; save the file as UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File extension is not a known tabular format.
    #[error("unsupported source format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or decode a spreadsheet.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook contains no worksheets.
    #[error("no worksheet found in {path}")]
    NoWorksheet { path: PathBuf },

    /// Source has no header row.
    #[error("source is empty: {path}")]
    EmptySource { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/customers.xlsx"),
        };
        assert_eq!(
            err.to_string(),
            "source file not found: /path/to/customers.xlsx"
        );
    }

    #[test]
    fn test_too_large_display() {
        let err = IngestError::FileTooLarge {
            path: PathBuf::from("big.csv"),
            size: 10,
            max_size: 5,
        };
        assert_eq!(
            err.to_string(),
            "file big.csv is 10 bytes, larger than the 5 byte limit"
        );
    }
}
