use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mailprep_model::{DuplicateGroup, DuplicateStats, FlatRecord};

use crate::commands::CommandResult;

/// Duplicate groups listed before the remainder is summarized.
const MAX_LISTED_GROUPS: usize = 10;

pub fn print_summary(result: &CommandResult) {
    let outcome = &result.outcome;
    println!("Source: {}", outcome.source);
    println!("Rows: {}", outcome.total_records);
    if !outcome.missing_columns.is_empty() {
        println!("Missing columns: {}", outcome.missing_columns.join(", "));
    }
    if let Some(stats) = outcome.stats() {
        print_stats_table(stats);
        print_duplicate_groups(&stats.duplicate_groups);
    }
    if let Some(rows) = &outcome.campaign {
        print_preview("Campaign extract", rows, result.preview_rows);
    }
    if let Some(rows) = outcome.personalized() {
        print_preview("Personalized extract", rows, result.preview_rows);
    }
    for notice in &outcome.notices {
        println!("{notice}");
    }
    if outcome.dry_run {
        println!("Dry run: no files written.");
    }
    for path in &outcome.written {
        println!("Wrote {}", path.display());
    }
}

fn print_stats_table(stats: &DuplicateStats) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total Records"), Cell::new(stats.total_records)]);
    table.add_row(vec![Cell::new("Unique Emails"), Cell::new(stats.unique_emails)]);
    table.add_row(vec![
        Cell::new("Duplicate Emails"),
        count_cell(stats.duplicate_emails, Color::Yellow),
    ]);
    println!("{table}");
}

fn print_duplicate_groups(groups: &[DuplicateGroup]) {
    if groups.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Email"),
        header_cell("Accounts"),
        header_cell("Customer IDs"),
        header_cell("Names"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for group in groups.iter().take(MAX_LISTED_GROUPS) {
        let ids: Vec<&str> = group.customers.iter().map(|c| c.cust_id.as_str()).collect();
        let names: Vec<String> = group
            .customers
            .iter()
            .map(|c| format!("{} {}", c.first_name, c.last_name))
            .collect();
        table.add_row(vec![
            Cell::new(&group.email).fg(Color::Blue),
            count_cell(group.count, Color::Yellow),
            Cell::new(ids.join(", ")),
            Cell::new(names.join(", ")),
        ]);
    }
    println!();
    println!("Duplicate emails:");
    println!("{table}");
    if groups.len() > MAX_LISTED_GROUPS {
        println!(
            "... and {} more duplicate groups",
            groups.len() - MAX_LISTED_GROUPS
        );
    }
}

fn print_preview<R: FlatRecord>(title: &str, rows: &[R], limit: usize) {
    if rows.is_empty() || limit == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(R::COLUMNS.iter().map(|column| header_cell(column)));
    apply_table_style(&mut table);
    for row in rows.iter().take(limit) {
        table.add_row(row.values());
    }
    println!();
    println!("{title} ({} of {} rows):", rows.len().min(limit), rows.len());
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, highlight: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(highlight).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
