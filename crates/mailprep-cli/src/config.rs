//! Settings loaded from `mailprep.toml`.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes. Command-line flags take precedence over file values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mailprep_model::{ExecutionMode, LineEnding};
use mailprep_output::{CAMPAIGN_FILE_NAME, DEDUPE_FILE_NAME, REPORT_FILE_NAME};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "mailprep.toml";

/// Rows shown in terminal previews by default.
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub output: OutputSettings,
    pub processing: ProcessingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Output directory. Defaults to the input file's directory.
    pub dir: Option<PathBuf>,
    pub campaign_file: String,
    pub dedupe_file: String,
    pub report_file: String,
    pub line_ending: LineEnding,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: None,
            campaign_file: CAMPAIGN_FILE_NAME.to_string(),
            dedupe_file: DEDUPE_FILE_NAME.to_string(),
            report_file: REPORT_FILE_NAME.to_string(),
            line_ending: LineEnding::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingSettings {
    /// Infer numeric CSV columns.
    pub infer_types: bool,
    /// Run both extracts concurrently.
    pub parallel: bool,
    pub preview_rows: usize,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            infer_types: true,
            parallel: false,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl ProcessingSettings {
    pub fn execution_mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse settings")
    }

    /// Loads settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Loads the explicit config file, else `mailprep.toml` in `dir` when
    /// present, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config file");
            return Self::load_from(&candidate);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.output.campaign_file, "email_campaign_data.csv");
        assert_eq!(settings.processing.preview_rows, 20);
        assert_eq!(
            settings.processing.execution_mode(),
            ExecutionMode::Sequential
        );
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let settings = Settings::from_toml(
            r#"
            [output]
            dir = "exports"
            line_ending = "unix"

            [processing]
            parallel = true
            "#,
        )
        .unwrap();
        assert_eq!(settings.output.dir, Some(PathBuf::from("exports")));
        assert_eq!(settings.output.line_ending, LineEnding::Unix);
        assert_eq!(settings.output.dedupe_file, "deduplicated_email_data.csv");
        assert!(settings.processing.infer_types);
        assert_eq!(settings.processing.execution_mode(), ExecutionMode::Parallel);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::from_toml("[output]\nformat = \"xlsx\"\n").is_err());
        assert!(Settings::from_toml("[output]\nline_ending = \"mac\"\n").is_err());
    }
}
