//! CLI argument definitions for the sightings tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sighting_model::{DurationBucket, ShapeCategory};
use sighting_query::SummaryKind;

#[derive(Parser)]
#[command(
    name = "sightings",
    version,
    about = "Clean and query civilian sighting reports",
    long_about = "Clean a raw sighting-report CSV into a typed snapshot and query it.\n\n\
                  Free-text durations are normalized to seconds, shapes are folded into\n\
                  five categories, and rows that cannot be interpreted are dropped."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Settings file (default: ./sightings.toml, then the user config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
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

    /// Allow report text (summaries, raw durations) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw CSV and write the snapshot cache.
    Preprocess(PreprocessArgs),

    /// Filter the cleaned table and print a summary.
    Query(QueryArgs),

    /// Normalize free-text durations to seconds.
    Duration(DurationArgs),
}

#[derive(Args)]
pub struct PreprocessArgs {
    /// Raw sighting CSV.
    #[arg(value_name = "CSV")]
    pub source: PathBuf,

    /// Snapshot directory (default: from settings).
    #[arg(long = "cache-dir", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Rebuild even if the snapshot matches the source.
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Raw CSV to build from when the snapshot is missing or stale.
    #[arg(long = "source", value_name = "CSV")]
    pub source: Option<PathBuf>,

    /// Snapshot directory (default: from settings).
    #[arg(long = "cache-dir", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Shape categories to keep (repeatable; none keeps every shape).
    #[arg(long = "shape", value_enum)]
    pub shapes: Vec<ShapeArg>,

    /// Duration bucket (short is under 60 seconds).
    #[arg(long = "duration", value_enum, default_value = "all")]
    pub duration: DurationArg,

    /// Decade label: a configured decade start, pre-<year>, or all.
    #[arg(long = "decade", value_name = "LABEL", default_value = "all")]
    pub decade: String,

    /// Summary table to print.
    #[arg(long = "summary", value_enum)]
    pub summary: Option<SummaryArg>,

    /// Maximum rows to print from the summary.
    #[arg(long = "rows", value_name = "N", default_value_t = 25)]
    pub rows: usize,

    /// Write the filtered reports to a CSV file.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct DurationArgs {
    /// Duration descriptions, e.g. "about 5 min".
    #[arg(value_name = "TEXT", required = true)]
    pub inputs: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShapeArg {
    Light,
    Circle,
    Triangle,
    Fireball,
    Other,
}

impl From<ShapeArg> for ShapeCategory {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Light => ShapeCategory::Light,
            ShapeArg::Circle => ShapeCategory::Circle,
            ShapeArg::Triangle => ShapeCategory::Triangle,
            ShapeArg::Fireball => ShapeCategory::Fireball,
            ShapeArg::Other => ShapeCategory::Other,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DurationArg {
    Short,
    Long,
    All,
}

impl From<DurationArg> for DurationBucket {
    fn from(arg: DurationArg) -> Self {
        match arg {
            DurationArg::Short => DurationBucket::Short,
            DurationArg::Long => DurationBucket::Long,
            DurationArg::All => DurationBucket::All,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SummaryArg {
    Monthly,
    Heatmap,
    Hourly,
    Histogram,
    Cities,
    Sentiment,
    Words,
}

impl From<SummaryArg> for SummaryKind {
    fn from(arg: SummaryArg) -> Self {
        match arg {
            SummaryArg::Monthly => SummaryKind::Monthly,
            SummaryArg::Heatmap => SummaryKind::Heatmap,
            SummaryArg::Hourly => SummaryKind::Hourly,
            SummaryArg::Histogram => SummaryKind::Histogram,
            SummaryArg::Cities => SummaryKind::Cities,
            SummaryArg::Sentiment => SummaryKind::Sentiment,
            SummaryArg::Words => SummaryKind::Words,
        }
    }
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
