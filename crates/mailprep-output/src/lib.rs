//! Output generation for processed customer data.
//!
//! Extracts are written as CSV with a fixed header row; the duplicate
//! statistics of a run can additionally be written as a JSON report.

pub mod error;
pub mod extract;
pub mod report;

pub use error::{OutputError, Result};
pub use extract::{
    CAMPAIGN_FILE_NAME, CsvOptions, DEDUPE_FILE_NAME, to_csv_string, write_csv, write_flat,
    write_raw_csv,
};
pub use report::{REPORT_FILE_NAME, RunReport, file_sha256, write_report};
