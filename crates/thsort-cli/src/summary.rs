use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use thsort_core::{LineOutcome, RunReport};
use thsort_model::{ToggleMode, ViewProfile};

use thsort_cli::render::SimulationStep;

/// Run summary for `render --summary`, printed to stderr.
pub fn print_report(profile: &ViewProfile, report: &RunReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Lines")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        outcome_cell(LineOutcome::Augmented),
        count_cell(report.augmented, Color::Green),
    ]);
    table.add_row(vec![
        outcome_cell(LineOutcome::Excluded),
        count_cell(report.excluded, Color::Blue),
    ]);
    table.add_row(vec![
        outcome_cell(LineOutcome::Passthrough),
        count_cell(report.passthrough, Color::DarkGrey),
    ]);
    table.add_row(vec![
        outcome_cell(LineOutcome::TagMismatch),
        count_cell(report.tag_mismatch, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.total).add_attribute(Attribute::Bold),
    ]);
    eprintln!("Profile: {} (<{}>, {})", profile.name, profile.tag, profile.toggle);
    eprintln!("{table}");
    if !report.duplicates.is_empty() {
        eprintln!("Duplicate keys: {}", report.duplicates.join(", "));
    }
    for mismatch in &report.receiver_mismatches {
        eprintln!(
            "- line {}: '{}' is looked up on {} instead of {}",
            mismatch.line,
            mismatch.key,
            mismatch.found,
            profile.prefs.as_deref().unwrap_or("-")
        );
    }
    if !report.already_handled.is_empty() {
        let lines: Vec<String> = report
            .already_handled
            .iter()
            .map(ToString::to_string)
            .collect();
        eprintln!(
            "Lines already carrying a click handler (rewritten again): {}",
            lines.join(", ")
        );
    }
}

/// Ordered column listing for `columns`.
pub fn print_columns(profile: &ViewProfile, report: &RunReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Key"),
        header_cell("Line"),
        header_cell("Sorting"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (index, column) in report.columns.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&column.key),
            dim_cell(column.line),
            outcome_cell(column.outcome),
        ]);
    }
    println!("Profile: {} ({} columns)", profile.name, report.columns.len());
    println!("{table}");
}

/// Click-by-click sort state for `simulate`.
pub fn print_simulation(steps: &[SimulationStep], mode: ToggleMode) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Click"),
        header_cell("Column"),
        header_cell("Active"),
        header_cell("Direction"),
        header_cell("Header"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, step) in steps.iter().enumerate() {
        let active = step
            .state
            .key
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string);
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&step.clicked),
            Cell::new(active),
            Cell::new(step.direction()),
            Cell::new(format!(
                "{}{}",
                step.clicked,
                step.state.indicator(&step.clicked)
            )),
        ]);
    }
    println!("Toggle mode: {mode}");
    println!("{table}");
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
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn outcome_cell(outcome: LineOutcome) -> Cell {
    match outcome {
        LineOutcome::Augmented => Cell::new("sortable").fg(Color::Green),
        LineOutcome::Excluded => Cell::new("excluded").fg(Color::Blue),
        LineOutcome::Passthrough => dim_cell(outcome.as_str()),
        LineOutcome::TagMismatch => Cell::new(outcome.as_str())
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
