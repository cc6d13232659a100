//! CSV reading through Polars.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mailprep_model::{RawRecord, Scalar};
use polars::prelude::{AnyValue, CsvParseOptions, CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};
use crate::source::{IngestOptions, SourceTable, normalize_header, open_error};

/// Rows sampled for type inference when it is enabled.
const INFER_SCHEMA_ROWS: usize = 100;

/// Reads a CSV file with a single header row into raw records.
pub fn read_csv_records(path: &Path, options: &IngestOptions) -> Result<SourceTable> {
    ensure_header_line(path)?;

    // A zero-row inference window reads every column as text.
    let infer_rows = if options.infer_types {
        INFER_SCHEMA_ROWS
    } else {
        0
    };
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(infer_rows))
        .with_parse_options(CsvParseOptions::default().with_truncate_ragged_lines(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let (columns, records) = frame_records(&df);
    Ok(SourceTable {
        path: path.to_path_buf(),
        columns,
        records,
    })
}

/// Converts DataFrame rows into [`RawRecord`]s.
///
/// Blank cells read as missing and fully blank rows are skipped, matching
/// the spreadsheet reader.
pub fn frame_records(df: &DataFrame) -> (Vec<String>, Vec<RawRecord>) {
    let columns: Vec<String> = df
        .get_columns()
        .iter()
        .map(|column| normalize_header(column.name().as_str()))
        .collect();

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut record = RawRecord::new();
        for (name, column) in columns.iter().zip(df.get_columns()) {
            if name.is_empty() {
                continue;
            }
            let value = any_to_scalar(column.get(idx).unwrap_or(AnyValue::Null));
            if !value.is_empty() {
                record.insert(name.as_str(), value);
            }
        }
        if !record.is_empty() {
            records.push(record);
        }
    }
    (columns, records)
}

/// Converts a Polars cell into a [`Scalar`].
pub fn any_to_scalar(value: AnyValue<'_>) -> Scalar {
    match value {
        AnyValue::Null => Scalar::Null,
        AnyValue::Boolean(b) => Scalar::Boolean(b),
        AnyValue::Int8(v) => Scalar::Integer(i64::from(v)),
        AnyValue::Int16(v) => Scalar::Integer(i64::from(v)),
        AnyValue::Int32(v) => Scalar::Integer(i64::from(v)),
        AnyValue::Int64(v) => Scalar::Integer(v),
        AnyValue::UInt8(v) => Scalar::Integer(i64::from(v)),
        AnyValue::UInt16(v) => Scalar::Integer(i64::from(v)),
        AnyValue::UInt32(v) => Scalar::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => Scalar::Integer(v),
            Err(_) => Scalar::Text(v.to_string()),
        },
        AnyValue::Float32(v) => Scalar::Float(f64::from(v)),
        AnyValue::Float64(v) => Scalar::Float(v),
        AnyValue::String(s) => Scalar::Text(s.to_string()),
        AnyValue::StringOwned(s) => Scalar::Text(s.to_string()),
        other => Scalar::Text(other.to_string()),
    }
}

/// Fails with `EmptySource` when the file has no non-blank first line.
fn ensure_header_line(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = BufReader::new(file);
    let mut first = String::new();
    reader
        .read_line(&mut first)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    if normalize_header(&first).is_empty() {
        return Err(IngestError::EmptySource {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
