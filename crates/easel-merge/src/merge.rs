//! Thresholded fuzzy left join of two tables.

use easel_match::extract;
use easel_model::{CellValue, Result, Table};
use tracing::debug;

/// Key columns driving one merge pass: the raw key on each side plus the
/// normalized copy actually used for scoring.
#[derive(Debug, Clone, Copy)]
pub struct MergeKeys<'a> {
    pub primary_key: &'a str,
    pub secondary_key: &'a str,
    pub primary_processed: &'a str,
    pub secondary_processed: &'a str,
}

/// Match acceptance settings.
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    /// Minimum score (0-100) for a match to be accepted. Inclusive.
    pub threshold: u8,
    /// Candidates considered per query row.
    pub limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: 60,
            limit: 1,
        }
    }
}

/// Per-pass match accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct MergeStats {
    pub matched: usize,
    pub unmatched: usize,
}

/// Left-join `primary` against `secondary` on fuzzy key equality.
///
/// Every primary row scores its normalized key against the full normalized
/// key column of `secondary`; the best candidate is accepted as the join
/// partner iff its score reaches the threshold. Unmatched rows are kept with
/// all-`Missing` secondary cells, so the output always has exactly one row
/// per primary row. Secondary column names already present in `primary` get
/// `suffix` appended.
pub fn fuzzy_left_merge(
    primary: &Table,
    secondary: &Table,
    keys: &MergeKeys<'_>,
    suffix: &str,
    options: MatchOptions,
) -> Result<(Table, MergeStats)> {
    primary.require_column(keys.primary_key)?;
    secondary.require_column(keys.secondary_key)?;
    let primary_processed = primary.require_column(keys.primary_processed)?;
    let secondary_processed = secondary.require_column(keys.secondary_processed)?;

    let candidates = secondary.column_text(secondary_processed);

    let mut columns = primary.columns.clone();
    for name in &secondary.columns {
        if primary.column_index(name).is_some() {
            columns.push(format!("{name}{suffix}"));
        } else {
            columns.push(name.clone());
        }
    }

    let mut out = Table::new(columns);
    let mut stats = MergeStats::default();
    for row in &primary.rows {
        let query = row[primary_processed].as_str_or_empty();
        let accepted = extract(query, &candidates, options.limit)
            .into_iter()
            .next()
            .filter(|found| found.score >= options.threshold);

        let mut cells = row.clone();
        match accepted {
            Some(found) => {
                stats.matched += 1;
                cells.extend(secondary.rows[found.index].iter().cloned());
            }
            None => {
                stats.unmatched += 1;
                cells.extend(std::iter::repeat_n(
                    CellValue::Missing,
                    secondary.columns.len(),
                ));
            }
        }
        out.push_row(cells)?;
    }

    debug!(
        matched = stats.matched,
        unmatched = stats.unmatched,
        threshold = options.threshold,
        "fuzzy merge pass complete"
    );
    Ok((out, stats))
}
