//! First-wins deduplication on a (key, group) pair.

use std::collections::BTreeSet;

use easel_model::{Result, Table};

/// Keep the first row for each distinct (key, group) value pair, in the
/// order pairs are first encountered. Missing cells participate as empty
/// strings, so rows with a blank title still collapse deterministically.
pub fn dedupe_by_group(table: &Table, key_col: &str, group_col: &str) -> Result<Table> {
    let key_idx = table.require_column(key_col)?;
    let group_idx = table.require_column(group_col)?;

    let mut seen = BTreeSet::new();
    let mut out = Table::new(table.columns.clone());
    for row in &table.rows {
        let composite = format!(
            "{}|{}",
            row[key_idx].as_str_or_empty().trim(),
            row[group_idx].as_str_or_empty().trim()
        );
        if seen.insert(composite) {
            out.push_row(row.clone())?;
        }
    }
    Ok(out)
}
