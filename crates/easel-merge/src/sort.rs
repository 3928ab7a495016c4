//! Deterministic numeric ordering of the final table.

use easel_model::{CellValue, Result, Table};

/// Stable sort by the named columns parsed as integers, ascending.
/// Unparseable or missing values order after all numeric ones; rows with
/// equal keys keep their prior relative order.
pub fn sort_by_numeric(table: &Table, columns: &[&str]) -> Result<Table> {
    let indices = columns
        .iter()
        .map(|name| table.require_column(name))
        .collect::<Result<Vec<_>>>()?;

    let mut out = table.clone();
    out.rows.sort_by_key(|row| {
        indices
            .iter()
            .map(|&idx| numeric_key(&row[idx]))
            .collect::<Vec<_>>()
    });
    Ok(out)
}

fn numeric_key(cell: &CellValue) -> (bool, i64) {
    match cell.as_str().and_then(|text| text.trim().parse::<i64>().ok()) {
        Some(value) => (false, value),
        None => (true, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str)]) -> Table {
        let mut out = Table::new(vec!["season".to_string(), "episode".to_string()]);
        for (season, episode) in rows {
            out.push_row(vec![CellValue::text(*season), CellValue::text(*episode)])
                .unwrap();
        }
        out
    }

    #[test]
    fn orders_by_season_then_episode() {
        let input = table(&[("2", "3"), ("1", "9"), ("1", "2")]);
        let out = sort_by_numeric(&input, &["season", "episode"]).unwrap();
        assert_eq!(out.cell(0, 0).as_str(), Some("1"));
        assert_eq!(out.cell(0, 1).as_str(), Some("2"));
        assert_eq!(out.cell(1, 1).as_str(), Some("9"));
        assert_eq!(out.cell(2, 0).as_str(), Some("2"));
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let mut input = Table::new(vec![
            "season".to_string(),
            "episode".to_string(),
            "tag".to_string(),
        ]);
        for tag in ["first", "second", "third"] {
            input
                .push_row(vec![
                    CellValue::text("3"),
                    CellValue::text("7"),
                    CellValue::text(tag),
                ])
                .unwrap();
        }
        let out = sort_by_numeric(&input, &["season", "episode"]).unwrap();
        assert_eq!(out.cell(0, 2).as_str(), Some("first"));
        assert_eq!(out.cell(1, 2).as_str(), Some("second"));
        assert_eq!(out.cell(2, 2).as_str(), Some("third"));
    }

    #[test]
    fn non_numeric_values_sort_last() {
        let input = table(&[("?", "1"), ("2", "1"), ("1", "1")]);
        let out = sort_by_numeric(&input, &["season", "episode"]).unwrap();
        assert_eq!(out.cell(0, 0).as_str(), Some("1"));
        assert_eq!(out.cell(1, 0).as_str(), Some("2"));
        assert_eq!(out.cell(2, 0).as_str(), Some("?"));
    }
}
