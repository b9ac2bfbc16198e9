use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crate::types::{BatchResult, FileReport, FileStatus};

pub fn print_summary(result: &BatchResult) {
    let mode = if result.dry_run { " (dry run)" } else { "" };
    println!("{}{}: {}", result.command, mode, result.dir.display());
    if let Some(path) = &result.output_dir {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &result.backup_dir
        && result.changed() > 0
        && !result.dry_run
    {
        println!("Backups: {}", path.display());
    }
    if result.files.is_empty() {
        println!("No matching files found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Items"),
        header_cell(result.change_label),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for file in &result.files {
        table.add_row(vec![
            file_cell(file, result),
            status_cell(&file.status),
            count_cell(file.items, None),
            count_cell(file.changes, Some(Color::Green)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} changed / {} scanned",
            result.changed(),
            result.scanned()
        ))
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold),
        Cell::new(result.files.iter().map(|file| file.items).sum::<usize>())
            .add_attribute(Attribute::Bold),
        Cell::new(result.total_changes()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!(
        "Files changed: {} of {} scanned, {} skipped, {} failed",
        result.changed(),
        result.scanned(),
        result.skipped(),
        result.failed()
    );
    if result.aborted {
        eprintln!("Conversion aborted: fix the failing file and run again. No files were written.");
    }
    let failures: Vec<&FileReport> = result
        .files
        .iter()
        .filter(|file| matches!(file.status, FileStatus::Failed(_)))
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for file in failures {
            eprintln!("- {}: {}", file.path.display(), file.status);
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_cell(file: &FileReport, result: &BatchResult) -> Cell {
    let shown = file.path.strip_prefix(&result.dir).unwrap_or(&file.path);
    Cell::new(shown.display())
}

fn status_cell(status: &FileStatus) -> Cell {
    let cell = Cell::new(status);
    match status {
        FileStatus::Updated | FileStatus::Converted { .. } => cell.fg(Color::Green),
        FileStatus::Unchanged => cell.fg(Color::DarkGrey),
        FileStatus::NotWritten | FileStatus::Skipped(_) => cell.fg(Color::Yellow),
        FileStatus::Failed(_) => cell.fg(Color::Red).add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize, color: Option<Color>) -> Cell {
    match color {
        Some(color) if count > 0 => Cell::new(count).fg(color).add_attribute(Attribute::Bold),
        _ if count > 0 => Cell::new(count),
        _ => dim_cell(count),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
