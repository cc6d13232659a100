//! JSON run report with duplicate statistics.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use mailprep_model::DuplicateStats;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{OutputError, Result};
use crate::extract::create_file;

/// Default file name for the run report.
pub const REPORT_FILE_NAME: &str = "deduplication_report.json";

/// Summary of one processing run.
///
/// `source_sha256` identifies the input so that a caller caching results
/// between runs can tell when the source changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub generated_at: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_sha256: Option<String>,
    pub total_records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalized_records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<DuplicateStats>,
}

impl RunReport {
    pub fn new(source: impl Into<String>, total_records: usize) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            source: source.into(),
            source_sha256: None,
            total_records,
            campaign_records: None,
            personalized_records: None,
            stats: None,
        }
    }

    #[must_use]
    pub fn with_source_sha256(mut self, digest: Option<String>) -> Self {
        self.source_sha256 = digest;
        self
    }

    #[must_use]
    pub fn with_campaign_records(mut self, count: usize) -> Self {
        self.campaign_records = Some(count);
        self
    }

    #[must_use]
    pub fn with_dedupe(mut self, personalized_records: usize, stats: DuplicateStats) -> Self {
        self.personalized_records = Some(personalized_records);
        self.stats = Some(stats);
        self
    }
}

/// Lowercase hex SHA-256 of a file's contents.
pub fn file_sha256(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

/// Writes the report as pretty-printed JSON.
pub fn write_report(path: &Path, report: &RunReport) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(report)?;
    let mut file = create_file(path)?;
    file.write_all(json.as_bytes())
        .and_then(|()| file.write_all(b"\n"))
        .map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(path = %path.display(), "report written");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_sections_are_omitted() {
        let report = RunReport::new("sample", 8).with_campaign_records(8);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["source"], "sample");
        assert_eq!(json["totalRecords"], 8);
        assert_eq!(json["campaignRecords"], 8);
        assert!(json.get("stats").is_none());
        assert!(json.get("sourceSha256").is_none());
    }

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let report = RunReport::new("sample", 0);
        assert!(report.generated_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
    }
}
