//! End-to-end runs against temporary directories.

use std::fs;
use std::path::PathBuf;

use mailprep_cli::config::Settings;
use mailprep_cli::run::{
    Extracts, InputSource, NO_DATA_NOTICE, RunOverrides, RunRequest, execute, write_sample,
};
use mailprep_model::LineEnding;
use tempfile::TempDir;

fn request(source: InputSource, extracts: Extracts, dir: &TempDir) -> RunRequest {
    let overrides = RunOverrides {
        output_dir: Some(dir.path().to_path_buf()),
        line_ending: Some(LineEnding::Unix),
        ..RunOverrides::default()
    };
    RunRequest::resolve(source, extracts, &Settings::default(), &overrides)
}

fn line_count(path: &PathBuf) -> usize {
    fs::read_to_string(path).unwrap().lines().count()
}

#[test]
fn sample_run_writes_both_extracts() {
    let dir = TempDir::new().unwrap();
    let request = request(InputSource::Sample, Extracts::Both, &dir);

    let outcome = execute(&request).unwrap();

    assert_eq!(outcome.total_records, 8);
    assert_eq!(outcome.written.len(), 2);
    assert_eq!(line_count(&request.campaign_path()), 9);
    assert_eq!(line_count(&request.dedupe_path()), 5);
    let stats = outcome.stats().unwrap();
    assert_eq!(stats.unique_emails, 4);
    assert_eq!(stats.duplicate_emails, 2);
    assert!(outcome.notices.is_empty());
}

#[test]
fn exported_sample_reads_back_identically() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("customers.csv");
    write_sample(&input, LineEnding::Dos).unwrap();

    let from_file = execute(&request(
        InputSource::File(input),
        Extracts::Both,
        &dir,
    ))
    .unwrap();
    let builtin = execute(&RunRequest {
        dry_run: true,
        ..request(InputSource::Sample, Extracts::Both, &dir)
    })
    .unwrap();

    assert_eq!(from_file.campaign, builtin.campaign);
    assert_eq!(from_file.personalized(), builtin.personalized());
    assert!(from_file.missing_columns.is_empty());
}

#[test]
fn report_includes_source_digest() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("customers.csv");
    write_sample(&input, LineEnding::Unix).unwrap();
    let mut request = request(InputSource::File(input), Extracts::Dedupe, &dir);
    request.write_report = true;

    let outcome = execute(&request).unwrap();

    assert_eq!(outcome.written.last(), Some(&request.report_path()));
    let json = fs::read_to_string(request.report_path()).unwrap();
    assert!(json.contains("\"sourceSha256\""));
    assert!(json.contains("\"duplicateEmails\": 2"));
    assert!(!request.campaign_path().exists());
}

#[test]
fn empty_extracts_become_notices() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("no_email.csv");
    fs::write(
        &input,
        "CUSTID,FNAME,LNAME,EMAIL,LICENSE_TYPE,RES_FLAG\n1,John,Doe,,Hunting,Resident\n",
    )
    .unwrap();

    let outcome = execute(&request(InputSource::File(input), Extracts::Both, &dir)).unwrap();

    assert!(outcome.written.is_empty());
    assert_eq!(outcome.notices.len(), 2);
    assert!(outcome.notices.iter().all(|n| n.starts_with(NO_DATA_NOTICE)));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut request = request(InputSource::Sample, Extracts::Both, &dir);
    request.dry_run = true;
    request.write_report = true;

    let outcome = execute(&request).unwrap();

    assert!(outcome.written.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.csv");

    let error = execute(&request(InputSource::File(input), Extracts::Campaign, &dir)).unwrap_err();

    assert!(format!("{error:#}").contains("absent.csv"));
}
