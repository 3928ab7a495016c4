use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use easel_cli::pipeline::MergeOutcome;

pub fn print_summary(outcome: &MergeOutcome) {
    match &outcome.written {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows"),
        header_cell("Matched"),
        header_cell("Unmatched"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for idx in 1..4 {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new("Colors used (primary)"),
        Cell::new(outcome.colors_rows),
        Cell::new(""),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Subject-matter join"),
        Cell::new(outcome.subjects_rows),
        Cell::new(outcome.subject_pass.matched),
        Cell::new(outcome.subject_pass.unmatched),
    ]);
    table.add_row(vec![
        Cell::new("Air-date join"),
        Cell::new(outcome.episodes_rows),
        Cell::new(outcome.episode_pass.matched),
        Cell::new(outcome.episode_pass.unmatched),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        Cell::new(outcome.duplicates_removed),
        Cell::new(""),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Final table"),
        Cell::new(outcome.output_rows),
        Cell::new(""),
        Cell::new(""),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
