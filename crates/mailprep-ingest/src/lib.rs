//! Customer source ingestion.
//!
//! This crate loads tabular customer exports into ordered sequences of
//! [`RawRecord`](mailprep_model::RawRecord)s for the transformation engine.
//!
//! # Features
//!
//! - **CSV Loading**: Polars reader with optional type inference
//! - **Spreadsheet Loading**: first worksheet of `.xlsx`, `.xls`, `.ods` workbooks
//! - **Preflight Checks**: file size limit and UTF-16 rejection
//! - **Sample Data**: a built-in dataset for demonstrations
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mailprep_ingest::{IngestOptions, read_records};
//!
//! let table = read_records(Path::new("customers.xlsx"), &IngestOptions::default())?;
//! println!("loaded {} rows", table.records.len());
//! ```

mod csv;
mod error;
mod sample;
mod source;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Source Reading ===
pub use csv::{any_to_scalar, frame_records, read_csv_records};
pub use source::{
    IngestOptions, MAX_SOURCE_FILE_SIZE, SourceFormat, SourceTable, check_file_size_with_limit,
    read_records, validate_encoding,
};
pub use workbook::{cell_to_scalar, range_records, read_workbook_records};

// === Sample Data ===
pub use sample::{SAMPLE_COLUMNS, sample_records};
