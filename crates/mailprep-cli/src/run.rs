//! Orchestration of one processing run: load, transform, write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use mailprep_ingest::{IngestOptions, SAMPLE_COLUMNS, read_records, sample_records};
use mailprep_model::{
    CampaignRecord, DuplicateStats, ExecutionMode, FlatRecord, LineEnding, PersonalizedRecord,
    RawRecord,
};
use mailprep_output::{
    CsvOptions, OutputError, RunReport, file_sha256, write_csv, write_raw_csv, write_report,
};
use mailprep_transform::{DedupeResult, process_dataset, run_campaign, run_dedupe};
use tracing::{debug, info, info_span, warn};

use crate::config::Settings;
use crate::logging::redact_value;

/// Notice shown when an extract has no rows.
pub const NO_DATA_NOTICE: &str = "No processed data to write";

/// Where source rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    /// The built-in eight-row dataset.
    Sample,
}

impl InputSource {
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Sample => "sample".to_string(),
        }
    }
}

/// Which extracts a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracts {
    Campaign,
    Dedupe,
    Both,
}

impl Extracts {
    pub fn campaign(self) -> bool {
        matches!(self, Self::Campaign | Self::Both)
    }

    pub fn dedupe(self) -> bool {
        matches!(self, Self::Dedupe | Self::Both)
    }
}

/// Command-line values that take precedence over [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub output_dir: Option<PathBuf>,
    pub raw_strings: bool,
    pub line_ending: Option<LineEnding>,
    pub parallel: bool,
    pub report: bool,
    pub dry_run: bool,
}

/// Fully resolved parameters of a run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub source: InputSource,
    pub extracts: Extracts,
    pub output_dir: PathBuf,
    pub campaign_file: String,
    pub dedupe_file: String,
    pub report_file: String,
    pub line_ending: LineEnding,
    pub infer_types: bool,
    pub mode: ExecutionMode,
    pub write_report: bool,
    pub dry_run: bool,
}

impl RunRequest {
    /// Merges flags over settings over defaults.
    ///
    /// The output directory falls back to the input file's directory, and to
    /// the working directory for the sample dataset.
    pub fn resolve(
        source: InputSource,
        extracts: Extracts,
        settings: &Settings,
        overrides: &RunOverrides,
    ) -> Self {
        let output_dir = overrides
            .output_dir
            .clone()
            .or_else(|| settings.output.dir.clone())
            .unwrap_or_else(|| default_output_dir(&source));
        let mode = if overrides.parallel {
            ExecutionMode::Parallel
        } else {
            settings.processing.execution_mode()
        };
        Self {
            source,
            extracts,
            output_dir,
            campaign_file: settings.output.campaign_file.clone(),
            dedupe_file: settings.output.dedupe_file.clone(),
            report_file: settings.output.report_file.clone(),
            line_ending: overrides.line_ending.unwrap_or(settings.output.line_ending),
            infer_types: settings.processing.infer_types && !overrides.raw_strings,
            mode,
            write_report: overrides.report,
            dry_run: overrides.dry_run,
        }
    }

    pub fn campaign_path(&self) -> PathBuf {
        self.output_dir.join(&self.campaign_file)
    }

    pub fn dedupe_path(&self) -> PathBuf {
        self.output_dir.join(&self.dedupe_file)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file)
    }

    fn csv_options(&self) -> CsvOptions {
        CsvOptions::new(self.line_ending)
    }
}

fn default_output_dir(source: &InputSource) -> PathBuf {
    match source {
        InputSource::File(path) => path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        InputSource::Sample => PathBuf::from("."),
    }
}

/// Result of a run, for display.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub source: String,
    pub total_records: usize,
    pub columns: Vec<String>,
    pub missing_columns: Vec<&'static str>,
    pub campaign: Option<Vec<CampaignRecord>>,
    pub dedupe: Option<DedupeResult>,
    pub written: Vec<PathBuf>,
    pub notices: Vec<String>,
    pub dry_run: bool,
}

impl RunOutcome {
    pub fn stats(&self) -> Option<&DuplicateStats> {
        self.dedupe.as_ref().map(|result| &result.stats)
    }

    pub fn personalized(&self) -> Option<&[PersonalizedRecord]> {
        self.dedupe.as_ref().map(|result| result.personalized.as_slice())
    }
}

struct LoadedSource {
    columns: Vec<String>,
    missing_columns: Vec<&'static str>,
    records: Vec<RawRecord>,
}

fn load_source(request: &RunRequest) -> Result<LoadedSource> {
    match &request.source {
        InputSource::Sample => Ok(LoadedSource {
            columns: SAMPLE_COLUMNS.iter().map(ToString::to_string).collect(),
            missing_columns: Vec::new(),
            records: sample_records(),
        }),
        InputSource::File(path) => {
            let options = IngestOptions::default().with_infer_types(request.infer_types);
            let table = read_records(path, &options)
                .with_context(|| format!("load {}", path.display()))?;
            let missing_columns = table.missing_columns();
            Ok(LoadedSource {
                columns: table.columns,
                missing_columns,
                records: table.records,
            })
        }
    }
}

/// Executes one run.
///
/// An extract with no rows is not written; a notice is recorded instead.
pub fn execute(request: &RunRequest) -> Result<RunOutcome> {
    let span = info_span!("run", source = %request.source.label());
    let _guard = span.enter();
    let start = Instant::now();

    let loaded = load_source(request)?;
    let records = &loaded.records;

    let (campaign, dedupe) = match request.extracts {
        Extracts::Campaign => (Some(run_campaign(records)), None),
        Extracts::Dedupe => (None, Some(run_dedupe(records))),
        Extracts::Both => {
            let result = process_dataset(records, request.mode);
            (
                Some(result.campaign),
                Some(DedupeResult {
                    personalized: result.personalized,
                    stats: result.stats,
                }),
            )
        }
    };

    if let Some(result) = &dedupe {
        for group in &result.stats.duplicate_groups {
            debug!(
                email = redact_value(&group.email),
                accounts = group.count,
                "duplicate email"
            );
        }
    }

    let mut outcome = RunOutcome {
        source: request.source.label(),
        total_records: records.len(),
        columns: loaded.columns,
        missing_columns: loaded.missing_columns,
        campaign,
        dedupe,
        written: Vec::new(),
        notices: Vec::new(),
        dry_run: request.dry_run,
    };

    if request.dry_run {
        info!("dry run: no files written");
    } else {
        write_outputs(request, &mut outcome)?;
    }

    info!(
        total_records = outcome.total_records,
        files_written = outcome.written.len(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(outcome)
}

fn write_outputs(request: &RunRequest, outcome: &mut RunOutcome) -> Result<()> {
    let options = request.csv_options();
    if let Some(rows) = &outcome.campaign {
        let path = request.campaign_path();
        let written = write_extract(&path, rows, options, &mut outcome.notices)?;
        outcome.written.extend(written);
    }
    if let Some(result) = &outcome.dedupe {
        let path = request.dedupe_path();
        let written = write_extract(&path, &result.personalized, options, &mut outcome.notices)?;
        outcome.written.extend(written);
    }
    if request.write_report {
        let path = write_run_report(request, outcome)?;
        outcome.written.push(path);
    }
    Ok(())
}

fn write_extract<R: FlatRecord>(
    path: &Path,
    rows: &[R],
    options: CsvOptions,
    notices: &mut Vec<String>,
) -> Result<Option<PathBuf>> {
    match write_csv(path, rows, options) {
        Ok(path) => Ok(Some(path)),
        Err(OutputError::NoRecords { path }) => {
            warn!(path = %path.display(), "extract is empty");
            notices.push(format!("{NO_DATA_NOTICE} ({})", path.display()));
            Ok(None)
        }
        Err(error) => Err(error).with_context(|| format!("write {}", path.display())),
    }
}

fn write_run_report(request: &RunRequest, outcome: &RunOutcome) -> Result<PathBuf> {
    let digest = match &request.source {
        InputSource::File(path) => Some(file_sha256(path).context("hash source")?),
        InputSource::Sample => None,
    };
    let mut report =
        RunReport::new(outcome.source.clone(), outcome.total_records).with_source_sha256(digest);
    if let Some(rows) = &outcome.campaign {
        report = report.with_campaign_records(rows.len());
    }
    if let Some(result) = &outcome.dedupe {
        report = report.with_dedupe(result.personalized.len(), result.stats.clone());
    }
    let path = request.report_path();
    write_report(&path, &report).with_context(|| format!("write {}", path.display()))
}

/// Writes the built-in sample dataset as an input CSV.
pub fn write_sample(path: &Path, line_ending: LineEnding) -> Result<PathBuf> {
    let records = sample_records();
    let written = write_raw_csv(path, SAMPLE_COLUMNS, &records, CsvOptions::new(line_ending))
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %written.display(), rows = records.len(), "sample written");
    Ok(written)
}
