//! Integration tests for source loading.

use std::fs;

use mailprep_ingest::{IngestError, IngestOptions, read_records};
use mailprep_model::Scalar;
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_csv_export() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "customers.csv",
        b"CUSTID,FNAME,LNAME,EMAIL,LICENSE_TYPE,RES_FLAG\n\
          9591943,ANDREW,DONATI,AND.DON@SNOW.EDU,Combination,Resident\n\
          9591945,MIKE,SMITH,mike@test.com,Fishing,Non-Resident\n",
    );

    let table = read_records(&path, &IngestOptions::default()).unwrap();

    assert_eq!(table.len(), 2);
    assert!(table.missing_columns().is_empty());
    assert_eq!(table.records[0].get("CUSTID"), &Scalar::Integer(9591943));
    assert_eq!(table.records[1].text("LICENSE_TYPE"), "Fishing");
}

#[test]
fn missing_columns_read_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "partial.csv", b"EMAIL,NOTES\na@b.com,vip\n");

    let table = read_records(&path, &IngestOptions::default()).unwrap();

    assert_eq!(table.missing_columns().len(), 5);
    assert_eq!(table.records[0].text("FNAME"), "");
    assert_eq!(table.records[0].text("NOTES"), "vip");
}

#[test]
fn rejects_utf16_csv() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "wide.csv", &[0xFF, 0xFE, b'A', 0x00]);

    let result = read_records(&path, &IngestOptions::default());

    assert!(matches!(
        result,
        Err(IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
            ..
        })
    ));
}

#[test]
fn rejects_oversized_files() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "big.csv", b"EMAIL\na@b.com\n");
    let options = IngestOptions::default().with_max_file_size(4);

    let result = read_records(&path, &options);

    assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
}

#[test]
fn rejects_unknown_extensions() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "customers.json", b"[]");

    let result = read_records(&path, &IngestOptions::default());

    assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
}

#[test]
fn reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");

    let result = read_records(&path, &IngestOptions::default());

    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn corrupt_workbook_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "broken.xlsx", b"not a zip archive");

    let result = read_records(&path, &IngestOptions::default());

    assert!(matches!(result, Err(IngestError::Workbook { .. })));
}
