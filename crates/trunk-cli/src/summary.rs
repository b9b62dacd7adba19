use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    println!(
        "Config: {} ({})",
        result.config_source, result.config_fingerprint
    );

    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Seen"),
        header_cell("Accepted"),
        header_cell("Rows"),
        header_cell("Skipped"),
        header_cell("Excluded"),
        header_cell("Generic"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new("Talkgroups"),
        Cell::new(summary.talkgroups_seen),
        Cell::new(summary.talkgroups_accepted),
        Cell::new(summary.talkgroups_written),
        count_cell(Some(summary.talkgroups_skipped), Color::Yellow),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Radio IDs"),
        Cell::new(summary.radios_seen),
        Cell::new(summary.radios_accepted),
        Cell::new(summary.radios_written),
        count_cell(Some(summary.radios_unlabelled), Color::Yellow),
        count_cell(Some(summary.radios_excluded), Color::Yellow),
        count_cell(Some(summary.radios_generic), Color::Cyan),
    ]);
    println!("{table}");

    if !result.outputs.is_empty() {
        let mut files = Table::new();
        files.set_header(vec![header_cell("Output"), header_cell("File")]);
        apply_table_style(&mut files);
        for output in &result.outputs {
            files.add_row(vec![
                dim_cell(output.kind),
                Cell::new(output.path.display()),
            ]);
        }
        println!("{files}");
    }

    println!("Wrote {} radio ID records", summary.radios_written);
}

pub fn print_json(result: &RunResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serialize run summary")?;
    println!("{json}");
    Ok(())
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
