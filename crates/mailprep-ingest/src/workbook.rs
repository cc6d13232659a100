//! Spreadsheet reading through calamine.
//!
//! Only the first worksheet is read. Its first row is the header; fully
//! blank rows are skipped and blank cells read as missing.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use mailprep_model::{RawRecord, Scalar};

use crate::error::{IngestError, Result};
use crate::source::{SourceTable, normalize_header};

/// Reads the first worksheet of a workbook into raw records.
pub fn read_workbook_records(path: &Path) -> Result<SourceTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let (columns, records) = range_records(&range).ok_or_else(|| IngestError::EmptySource {
        path: path.to_path_buf(),
    })?;
    Ok(SourceTable {
        path: path.to_path_buf(),
        columns,
        records,
    })
}

/// Converts a worksheet range into header names and records.
///
/// Returns `None` when the range has no rows at all.
pub fn range_records(range: &Range<Data>) -> Option<(Vec<String>, Vec<RawRecord>)> {
    let mut rows = range.rows();
    let header = rows.next()?;
    let columns: Vec<String> = header
        .iter()
        .map(|cell| normalize_header(&cell_to_scalar(cell).to_text()))
        .collect();

    let mut records = Vec::new();
    for row in rows {
        let mut record = RawRecord::new();
        for (name, cell) in columns.iter().zip(row) {
            if name.is_empty() {
                continue;
            }
            let value = cell_to_scalar(cell);
            if !value.is_empty() {
                record.insert(name.as_str(), value);
            }
        }
        if !record.is_empty() {
            records.push(record);
        }
    }

    if columns.iter().all(String::is_empty) {
        return None;
    }
    Some((columns, records))
}

/// Converts a spreadsheet cell into a [`Scalar`].
///
/// Date cells keep their serial number, as a spreadsheet reader without
/// date formatting would report them.
pub fn cell_to_scalar(cell: &Data) -> Scalar {
    match cell {
        Data::Empty | Data::Error(_) => Scalar::Null,
        Data::Int(v) => Scalar::Integer(*v),
        Data::Float(v) => Scalar::Float(*v),
        Data::Bool(v) => Scalar::Boolean(*v),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Scalar::Text(s.clone()),
        Data::DateTime(dt) => Scalar::Float(dt.as_f64()),
    }
}
