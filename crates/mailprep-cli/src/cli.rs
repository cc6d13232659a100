//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mailprep",
    version,
    about = "Prepare customer exports for bulk email campaigns",
    long_about = "Prepare customer exports for bulk email campaigns.\n\n\
                  Produces a campaign upload (one row per deliverable customer) and a\n\
                  personalized extract with one row per email address, merging\n\
                  accounts that share an address."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow customer values such as email addresses in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: ./mailprep.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the campaign upload extract.
    Campaign(ProcessArgs),

    /// Build the personalized extract and report duplicate emails.
    Dedupe(ProcessArgs),

    /// Build both extracts.
    Run(RunArgs),

    /// Write the built-in sample dataset as a CSV input file.
    Sample(SampleArgs),
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Customer export (.csv, .xlsx, .xls, .xlsm, .xlsb, .ods).
    #[arg(
        value_name = "INPUT",
        required_unless_present = "sample",
        conflicts_with = "sample"
    )]
    pub input: Option<PathBuf>,

    /// Use the built-in sample dataset instead of INPUT.
    #[arg(long = "sample")]
    pub sample: bool,

    /// Output directory (default: the input file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read every CSV cell as text instead of inferring numbers.
    #[arg(long = "raw-strings")]
    pub raw_strings: bool,

    /// Line terminator for written extracts.
    #[arg(long = "line-ending", value_enum)]
    pub line_ending: Option<LineEndingArg>,

    /// Number of output rows to preview.
    #[arg(long = "preview", value_name = "ROWS")]
    pub preview: Option<usize>,

    /// Also write the JSON run report.
    #[arg(long = "report")]
    pub report: bool,

    /// Process and summarize without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub process: ProcessArgs,

    /// Run the two extracts on separate threads.
    #[arg(long = "parallel")]
    pub parallel: bool,
}

#[derive(Args)]
pub struct SampleArgs {
    /// Destination CSV path.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Line terminator for the written file.
    #[arg(long = "line-ending", value_enum)]
    pub line_ending: Option<LineEndingArg>,
}

/// CLI line ending choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LineEndingArg {
    Dos,
    Unix,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
