use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use asc_model::ProcessedFile;

use crate::types::BatchResult;

pub fn print_batch_summary(result: &BatchResult) {
    if result.summaries.is_empty() && result.errors.is_empty() {
        println!("No files to convert.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Output"),
        header_cell("Records"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut total_records = 0usize;
    for summary in &result.summaries {
        total_records += summary.records;
        let output = match &summary.output {
            Some(path) => Cell::new(path.display()),
            None => Cell::new("(dry run)").fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(summary.source.display()),
            output,
            Cell::new(summary.records),
            Cell::new(summary.columns),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} files", result.summaries.len())),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        Cell::new("-").fg(Color::DarkGrey),
    ]);
    println!("{table}");

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

/// Renders the first rows and columns of a converted file.
pub fn print_preview(file: &ProcessedFile, rows: usize, cols: usize) {
    println!("Preview: {}", file.file_name);

    let shown_cols = file.headers.len().min(cols);
    let mut table = Table::new();
    table.set_header(
        file.headers
            .iter()
            .take(shown_cols)
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);

    for record in file.records.iter().take(rows) {
        let cells: Vec<Cell> = file
            .headers
            .iter()
            .take(shown_cols)
            .map(|header| match record.get(header) {
                Some(value) => Cell::new(value),
                None => Cell::new(""),
            })
            .collect();
        table.add_row(cells);
    }
    println!("{table}");

    let hidden_rows = file.records.len().saturating_sub(rows);
    if hidden_rows > 0 {
        println!("... {hidden_rows} more rows");
    }
    let hidden_cols = file.headers.len().saturating_sub(shown_cols);
    if hidden_cols > 0 {
        println!("... {hidden_cols} more columns");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
