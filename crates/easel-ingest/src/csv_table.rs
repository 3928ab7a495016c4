use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use easel_model::{CellValue, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

/// Read a CSV file into a [`Table`].
///
/// The first record is the header row. Headers and cells are trimmed of
/// surrounding whitespace and a UTF-8 BOM; empty cells become `Missing`.
/// Short records are padded with `Missing`, long ones truncated to the
/// header width. An empty file yields an empty table.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut records = reader.records();
    let Some(first) = records.next() else {
        return Ok(Table::new(Vec::new()));
    };
    let first = first.with_context(|| format!("read header: {}", path.display()))?;
    let headers: Vec<String> = first.iter().map(normalize_header).collect();

    let mut table = Table::new(headers);
    for record in records {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut row = Vec::with_capacity(table.columns.len());
        for idx in 0..table.columns.len() {
            row.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        table
            .push_row(row)
            .with_context(|| format!("read record: {}", path.display()))?;
    }

    debug!(
        path = %path.display(),
        columns = table.columns.len(),
        rows = table.len(),
        "csv table loaded"
    );
    Ok(table)
}

/// Write a [`Table`] as CSV: one header row, `Missing` as an empty field.
pub fn write_csv_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(CellValue::as_str_or_empty))
            .with_context(|| format!("write record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    debug!(path = %path.display(), rows = table.len(), "csv table written");
    Ok(())
}
