//! CLI argument definitions for the reconciler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "easel",
    version,
    about = "Reconcile painting episode tables by fuzzy title matching",
    long_about = "Consolidate the colors-used, subject-matter, and episode air-date\n\
                  tables into one table, joined on approximate title equality.\n\
                  Every colors-used row survives; rows without an acceptable match\n\
                  keep empty joined fields."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge the three source tables into one consolidated CSV.
    Merge(MergeArgs),
}

#[derive(Parser)]
pub struct MergeArgs {
    /// Colors-used CSV (must have painting_title, season, episode columns).
    #[arg(value_name = "COLORS_CSV")]
    pub colors: PathBuf,

    /// Subject-matter CSV (must have a TITLE column).
    #[arg(value_name = "SUBJECTS_CSV")]
    pub subjects: PathBuf,

    /// Episode air-date CSV (must have an Episode_TITLE column).
    #[arg(value_name = "EPISODES_CSV")]
    pub episodes: PathBuf,

    /// Path of the consolidated output CSV.
    #[arg(long = "output", value_name = "PATH", default_value = "Merged_Output.csv")]
    pub output: PathBuf,

    /// Minimum similarity score (0-100) to accept a match. Inclusive.
    #[arg(long = "threshold", value_name = "SCORE", default_value_t = 60,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: u8,

    /// Candidates considered per query row.
    #[arg(long = "match-limit", value_name = "N", default_value_t = 1)]
    pub match_limit: usize,

    /// Run the transform and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
