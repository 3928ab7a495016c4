//! End-to-end reconciliation of the three painting tables.

use easel_match::normalize_title;
use easel_model::{CellValue, Result, Table};
use tracing::info;

use crate::dedupe::dedupe_by_group;
use crate::merge::{MatchOptions, MergeKeys, MergeStats, fuzzy_left_merge};
use crate::sort::sort_by_numeric;

/// Column names of the source datasets.
pub mod columns {
    pub const PAINTING_TITLE: &str = "painting_title";
    pub const SEASON: &str = "season";
    pub const EPISODE: &str = "episode";
    pub const SUBJECT_TITLE: &str = "TITLE";
    pub const EPISODE_TITLE: &str = "Episode_TITLE";

    pub const PROCESSED_PAINTING_TITLE: &str = "processed_painting_title";
    pub const PROCESSED_SUBJECT_TITLE: &str = "processed_TITLE";
    pub const PROCESSED_EPISODE_TITLE: &str = "processed_Episode_TITLE";
}

/// Collision suffix for the subject-matter merge pass.
const SUBJECT_SUFFIX: &str = "_subject";
/// Collision suffix for the air-date merge pass.
const EPISODE_SUFFIX: &str = "_episode";

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// Minimum acceptable match score, inclusive.
    pub threshold: u8,
    /// Candidates considered per query row.
    pub match_limit: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            threshold: 60,
            match_limit: 1,
        }
    }
}

/// Final table plus per-stage accounting for logging and the run summary.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub table: Table,
    pub subject_pass: MergeStats,
    pub episode_pass: MergeStats,
    pub duplicates_removed: usize,
}

/// Run the full pipeline: normalize keys, merge colors with subjects, merge
/// the result with episode air dates, collapse (title, season) duplicates,
/// sort by season and episode, and drop the transient key columns.
///
/// Structural problems (a required column absent from an input) fail here
/// before any scoring work starts. Matching outcomes are never errors: a row
/// whose best score stays below the threshold keeps `Missing` joined cells.
pub fn reconcile(
    colors: &Table,
    subjects: &Table,
    episodes: &Table,
    options: PipelineOptions,
) -> Result<PipelineOutcome> {
    // Pre-flight: every column the later stages key on must exist up front.
    colors.require_column(columns::PAINTING_TITLE)?;
    colors.require_column(columns::SEASON)?;
    colors.require_column(columns::EPISODE)?;
    subjects.require_column(columns::SUBJECT_TITLE)?;
    episodes.require_column(columns::EPISODE_TITLE)?;

    let colors = with_normalized_key(
        colors,
        columns::PAINTING_TITLE,
        columns::PROCESSED_PAINTING_TITLE,
    )?;
    let subjects = with_normalized_key(
        subjects,
        columns::SUBJECT_TITLE,
        columns::PROCESSED_SUBJECT_TITLE,
    )?;
    let episodes = with_normalized_key(
        episodes,
        columns::EPISODE_TITLE,
        columns::PROCESSED_EPISODE_TITLE,
    )?;

    let match_options = MatchOptions {
        threshold: options.threshold,
        limit: options.match_limit,
    };

    let (merged, subject_pass) = fuzzy_left_merge(
        &colors,
        &subjects,
        &MergeKeys {
            primary_key: columns::PAINTING_TITLE,
            secondary_key: columns::SUBJECT_TITLE,
            primary_processed: columns::PROCESSED_PAINTING_TITLE,
            secondary_processed: columns::PROCESSED_SUBJECT_TITLE,
        },
        SUBJECT_SUFFIX,
        match_options,
    )?;
    info!(
        matched = subject_pass.matched,
        unmatched = subject_pass.unmatched,
        "subject-matter pass done"
    );

    // The raw painting title stays the authoritative key for the second
    // pass, so its normalized copy is rebuilt from the raw column.
    let merged = with_normalized_key(
        &merged,
        columns::PAINTING_TITLE,
        columns::PROCESSED_PAINTING_TITLE,
    )?;

    let (merged, episode_pass) = fuzzy_left_merge(
        &merged,
        &episodes,
        &MergeKeys {
            primary_key: columns::PAINTING_TITLE,
            secondary_key: columns::EPISODE_TITLE,
            primary_processed: columns::PROCESSED_PAINTING_TITLE,
            secondary_processed: columns::PROCESSED_EPISODE_TITLE,
        },
        EPISODE_SUFFIX,
        match_options,
    )?;
    info!(
        matched = episode_pass.matched,
        unmatched = episode_pass.unmatched,
        "air-date pass done"
    );

    let before = merged.len();
    let deduped = dedupe_by_group(&merged, columns::PAINTING_TITLE, columns::SEASON)?;
    let duplicates_removed = before - deduped.len();

    let sorted = sort_by_numeric(&deduped, &[columns::SEASON, columns::EPISODE])?;
    let table = sorted.drop_columns(&[
        columns::PROCESSED_PAINTING_TITLE,
        columns::PROCESSED_SUBJECT_TITLE,
        columns::PROCESSED_EPISODE_TITLE,
    ]);

    info!(
        rows = table.len(),
        duplicates_removed, "reconciliation complete"
    );
    Ok(PipelineOutcome {
        table,
        subject_pass,
        episode_pass,
        duplicates_removed,
    })
}

/// Attach (or refresh) the normalized copy of a title column.
fn with_normalized_key(table: &Table, source: &str, target: &str) -> Result<Table> {
    let idx = table.require_column(source)?;
    let values = table
        .rows
        .iter()
        .map(|row| CellValue::text(normalize_title(row[idx].as_str_or_empty())))
        .collect();
    table.with_column(target, values)
}
