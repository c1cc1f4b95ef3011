//! Terminal tables.

use std::num::NonZeroU64;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};
use sighting_ingest::PreprocessStats;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Render a Polars value without trailing float noise.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Format a float with at most four decimals and no trailing zeros.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let text = format!("{value:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Rows of the drop-statistics table: reason, rows, share of input.
pub fn stats_rows(stats: &PreprocessStats) -> Vec<[String; 3]> {
    let share = |count: usize| {
        if stats.input_rows == 0 {
            "-".to_string()
        } else {
            format!("{:.1}%", count as f64 * 100.0 / stats.input_rows as f64)
        }
    };
    let mut rows = vec![[
        "input".to_string(),
        stats.input_rows.to_string(),
        share(stats.input_rows),
    ]];
    rows.extend(stats.drops().map(|(reason, count)| {
        [format!("dropped: {reason}"), count.to_string(), share(count)]
    }));
    rows.push([
        "kept".to_string(),
        stats.kept_rows.to_string(),
        share(stats.kept_rows),
    ]);
    rows
}

pub fn stats_table(stats: &PreprocessStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count"), header_cell("Share")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let rows = stats_rows(stats);
    let last = rows.len().saturating_sub(1);
    for (idx, [label, count, share]) in rows.into_iter().enumerate() {
        if idx == last {
            table.add_row(vec![
                Cell::new(label).fg(Color::Green).add_attribute(Attribute::Bold),
                Cell::new(count).add_attribute(Attribute::Bold),
                Cell::new(share).add_attribute(Attribute::Bold),
            ]);
        } else {
            table.add_row(vec![Cell::new(label), Cell::new(count), Cell::new(share)]);
        }
    }
    table
}

/// Render up to `max_rows` rows of a DataFrame.
pub fn frame_table(df: &DataFrame, max_rows: usize) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .into_iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);

    for idx in 0..df.height().min(max_rows) {
        let row: Vec<String> = df
            .get_columns()
            .iter()
            .map(|column| column.get(idx).map(any_to_string).unwrap_or_default())
            .collect();
        table.add_row(row);
    }
    table
}

/// One row per input: the text and its normalized seconds.
pub fn duration_table(results: &[(String, Option<NonZeroU64>)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Input"), header_cell("Seconds")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for (input, seconds) in results {
        let seconds = match seconds {
            Some(value) => Cell::new(value.get()),
            None => Cell::new("unparseable").fg(Color::DarkGrey),
        };
        table.add_row(vec![Cell::new(input), seconds]);
    }
    table
}
