//! Source detection, preflight checks, and the loaded table type.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use mailprep_model::{KNOWN_COLUMNS, RawRecord};

use crate::csv::read_csv_records;
use crate::error::{IngestError, Result};
use crate::workbook::read_workbook_records;

/// Maximum source file size (500 MB default).
pub const MAX_SOURCE_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Extensions read through the spreadsheet reader.
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Options controlling how a source file is read.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Infer numeric CSV columns. When false every CSV cell is read as text.
    pub infer_types: bool,
    /// Largest accepted file size in bytes.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            infer_types: true,
            max_file_size: MAX_SOURCE_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_infer_types(mut self, enable: bool) -> Self {
        self.infer_types = enable;
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

/// Tabular source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Workbook,
}

impl SourceFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if extension == "csv" {
            Ok(Self::Csv)
        } else if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Workbook)
        } else {
            Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            })
        }
    }
}

/// Rows loaded from one source file.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub path: PathBuf,
    /// Header names in file order, trimmed.
    pub columns: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl SourceTable {
    /// Expected columns absent from the header.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        KNOWN_COLUMNS
            .iter()
            .copied()
            .filter(|known| !self.columns.iter().any(|column| column == known))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads a CSV or spreadsheet file into raw records.
pub fn read_records(path: &Path, options: &IngestOptions) -> Result<SourceTable> {
    let format = SourceFormat::detect(path)?;
    check_file_size_with_limit(path, options.max_file_size)?;
    let table = match format {
        SourceFormat::Csv => {
            validate_encoding(path)?;
            read_csv_records(path, options)?
        }
        SourceFormat::Workbook => read_workbook_records(path)?,
    };

    let missing = table.missing_columns();
    if !missing.is_empty() {
        tracing::warn!(
            path = %path.display(),
            missing = ?missing,
            "source is missing expected columns; they will read as empty"
        );
    }
    tracing::info!(
        path = %path.display(),
        rows = table.records.len(),
        columns = table.columns.len(),
        "source loaded"
    );
    Ok(table)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects files that start with a UTF-16 byte order mark.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

pub(crate) fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Trims a header cell, dropping a UTF-8 byte order mark.
pub(crate) fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_by_extension() {
        assert_eq!(
            SourceFormat::detect(Path::new("data/customers.CSV")).unwrap(),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::detect(Path::new("customers.xlsx")).unwrap(),
            SourceFormat::Workbook
        );
        assert_eq!(
            SourceFormat::detect(Path::new("old.xls")).unwrap(),
            SourceFormat::Workbook
        );
        assert!(matches!(
            SourceFormat::detect(Path::new("notes.txt")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            SourceFormat::detect(Path::new("no_extension")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn header_normalization() {
        assert_eq!(normalize_header("\u{feff}CUSTID"), "CUSTID");
        assert_eq!(normalize_header("  EMAIL "), "EMAIL");
    }

    #[test]
    fn missing_columns_lists_absent_known_columns() {
        let table = SourceTable {
            columns: vec!["EMAIL".to_string(), "FNAME".to_string(), "EXTRA".to_string()],
            ..SourceTable::default()
        };
        assert_eq!(
            table.missing_columns(),
            vec!["CUSTID", "LNAME", "LICENSE_TYPE", "RES_FLAG"]
        );
    }
}
