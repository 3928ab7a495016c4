use std::fs;

use easel_ingest::{read_csv_table, write_csv_table};
use easel_model::{CellValue, Table};
use tempfile::tempdir;

#[test]
fn reads_headers_and_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("colors.csv");
    fs::write(
        &path,
        "painting_title,season,episode\nMountain Majesty,1,1\nWinter Mist,2,4\n",
    )
    .unwrap();

    let table = read_csv_table(&path).unwrap();
    assert_eq!(
        table.columns,
        vec!["painting_title", "season", "episode"]
    );
    assert_eq!(table.len(), 2);
    assert_eq!(table.cell(1, 0).as_str(), Some("Winter Mist"));
}

#[test]
fn trims_bom_and_whitespace() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bom.csv");
    fs::write(&path, "\u{feff}TITLE , MOUNTAIN\n  Ocean Dream ,1\n").unwrap();

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.columns, vec!["TITLE", "MOUNTAIN"]);
    assert_eq!(table.cell(0, 0).as_str(), Some("Ocean Dream"));
}

#[test]
fn empty_cells_become_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gaps.csv");
    fs::write(&path, "a,b,c\n1,,3\n").unwrap();

    let table = read_csv_table(&path).unwrap();
    assert!(table.cell(0, 1).is_missing());
    assert_eq!(table.cell(0, 2).as_str(), Some("3"));
}

#[test]
fn short_records_are_padded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ragged.csv");
    fs::write(&path, "a,b,c\n1,2\n").unwrap();

    let table = read_csv_table(&path).unwrap();
    assert_eq!(table.len(), 1);
    assert!(table.cell(0, 2).is_missing());
}

#[test]
fn empty_file_yields_empty_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let table = read_csv_table(&path).unwrap();
    assert!(table.columns.is_empty());
    assert!(table.is_empty());
}

#[test]
fn written_table_reads_back_identically() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let mut table = Table::new(vec!["painting_title".to_string(), "air_date".to_string()]);
    table
        .push_row(vec![
            CellValue::text("Mountain Majesty"),
            CellValue::Missing,
        ])
        .unwrap();
    table
        .push_row(vec![
            CellValue::text("Ocean Dream"),
            CellValue::text("July 4, 1984"),
        ])
        .unwrap();

    write_csv_table(&path, &table).unwrap();
    let round = read_csv_table(&path).unwrap();
    assert_eq!(round, table);
}
