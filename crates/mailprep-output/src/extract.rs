//! Delimited-text writers for campaign and personalized extracts.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use mailprep_model::{FlatRecord, LineEnding, RawRecord};

use crate::error::{OutputError, Result};

/// Default file name for the campaign extract.
pub const CAMPAIGN_FILE_NAME: &str = "email_campaign_data.csv";
/// Default file name for the personalized extract.
pub const DEDUPE_FILE_NAME: &str = "deduplicated_email_data.csv";

/// Options for CSV output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvOptions {
    pub line_ending: LineEnding,
}

impl CsvOptions {
    pub fn new(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }

    fn builder(self) -> WriterBuilder {
        let mut builder = WriterBuilder::new();
        builder.terminator(match self.line_ending {
            LineEnding::Dos => Terminator::CRLF,
            LineEnding::Unix => Terminator::Any(b'\n'),
        });
        builder
    }
}

/// Writes a header row and one line per record to `writer`.
pub fn write_flat<W, R>(writer: W, records: &[R], options: CsvOptions) -> csv::Result<()>
where
    W: Write,
    R: FlatRecord,
{
    let mut csv = options.builder().from_writer(writer);
    csv.write_record(R::COLUMNS)?;
    for record in records {
        csv.write_record(record.values())?;
    }
    csv.flush()?;
    Ok(())
}

/// Renders records as CSV text.
pub fn to_csv_string<R: FlatRecord>(records: &[R], options: CsvOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_flat(&mut buffer, records, options).map_err(|source| OutputError::Csv {
        path: PathBuf::from("<memory>"),
        source,
    })?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes records to `path`, creating parent directories.
///
/// An empty record set is refused with [`OutputError::NoRecords`] so that
/// no header-only file is delivered.
pub fn write_csv<R: FlatRecord>(path: &Path, records: &[R], options: CsvOptions) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(OutputError::NoRecords {
            path: path.to_path_buf(),
        });
    }
    let file = create_file(path)?;
    write_flat(file, records, options).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = records.len(), "extract written");
    Ok(path.to_path_buf())
}

/// Writes raw source rows with the given column order.
///
/// Used to export the built-in sample dataset as an input file.
pub fn write_raw_csv(
    path: &Path,
    columns: &[&str],
    records: &[RawRecord],
    options: CsvOptions,
) -> Result<PathBuf> {
    let file = create_file(path)?;
    let to_csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut csv = options.builder().from_writer(file);
    csv.write_record(columns).map_err(to_csv_error)?;
    for record in records {
        let row: Vec<String> = columns.iter().map(|column| record.text(column)).collect();
        csv.write_record(&row).map_err(to_csv_error)?;
    }
    csv.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

pub(crate) fn create_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
