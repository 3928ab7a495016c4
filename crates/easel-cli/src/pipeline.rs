//! Reads the three source CSVs, runs the reconciliation, writes the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use easel_ingest::{read_csv_table, write_csv_table};
use easel_merge::{MergeStats, PipelineOptions, reconcile};

/// One merge run, fully described.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    pub colors: PathBuf,
    pub subjects: PathBuf,
    pub episodes: PathBuf,
    pub output: PathBuf,
    pub threshold: u8,
    pub match_limit: usize,
    pub dry_run: bool,
}

/// What a run did, for the summary printer.
#[derive(Debug)]
pub struct MergeOutcome {
    pub colors_rows: usize,
    pub subjects_rows: usize,
    pub episodes_rows: usize,
    pub subject_pass: MergeStats,
    pub episode_pass: MergeStats,
    pub duplicates_removed: usize,
    pub output_rows: usize,
    /// Where the output landed; `None` on a dry run.
    pub written: Option<PathBuf>,
}

pub fn run_merge(request: &MergeRequest) -> Result<MergeOutcome> {
    let colors = read_csv_table(&request.colors).context("load colors-used table")?;
    let subjects = read_csv_table(&request.subjects).context("load subject-matter table")?;
    let episodes = read_csv_table(&request.episodes).context("load episode air-date table")?;
    info!(
        colors = colors.len(),
        subjects = subjects.len(),
        episodes = episodes.len(),
        "source tables loaded"
    );

    let options = PipelineOptions {
        threshold: request.threshold,
        match_limit: request.match_limit,
    };
    let outcome = reconcile(&colors, &subjects, &episodes, options)
        .context("reconcile painting tables")?;

    let written = if request.dry_run {
        info!("dry run, skipping output write");
        None
    } else {
        write_csv_table(&request.output, &outcome.table).context("write merged table")?;
        Some(request.output.clone())
    };

    Ok(MergeOutcome {
        colors_rows: colors.len(),
        subjects_rows: subjects.len(),
        episodes_rows: episodes.len(),
        subject_pass: outcome.subject_pass,
        episode_pass: outcome.episode_pass,
        duplicates_removed: outcome.duplicates_removed,
        output_rows: outcome.table.len(),
        written,
    })
}
