use std::path::{Path, PathBuf};

use anyhow::Result;
use mailprep_cli::config::Settings;
use mailprep_cli::run::{
    Extracts, InputSource, RunOutcome, RunOverrides, RunRequest, execute, write_sample,
};
use mailprep_model::LineEnding;
use tracing::info_span;

use crate::cli::{LineEndingArg, ProcessArgs, SampleArgs};

/// A finished run plus how many rows to preview.
pub struct CommandResult {
    pub outcome: RunOutcome,
    pub preview_rows: usize,
}

pub fn run_extracts(
    args: &ProcessArgs,
    extracts: Extracts,
    parallel: bool,
    config: Option<&Path>,
) -> Result<CommandResult> {
    let settings = Settings::discover(config, Path::new("."))?;
    let source = match (&args.input, args.sample) {
        (Some(path), false) => InputSource::File(path.clone()),
        _ => InputSource::Sample,
    };
    let overrides = RunOverrides {
        output_dir: args.output_dir.clone(),
        raw_strings: args.raw_strings,
        line_ending: args.line_ending.map(line_ending),
        parallel,
        report: args.report,
        dry_run: args.dry_run,
    };
    let request = RunRequest::resolve(source, extracts, &settings, &overrides);
    let outcome = execute(&request)?;
    Ok(CommandResult {
        outcome,
        preview_rows: args.preview.unwrap_or(settings.processing.preview_rows),
    })
}

pub fn run_sample(args: &SampleArgs, config: Option<&Path>) -> Result<PathBuf> {
    let span = info_span!("sample");
    let _guard = span.enter();
    let settings = Settings::discover(config, Path::new("."))?;
    let ending = args
        .line_ending
        .map_or(settings.output.line_ending, line_ending);
    write_sample(&args.output, ending)
}

fn line_ending(arg: LineEndingArg) -> LineEnding {
    match arg {
        LineEndingArg::Dos => LineEnding::Dos,
        LineEndingArg::Unix => LineEnding::Unix,
    }
}
