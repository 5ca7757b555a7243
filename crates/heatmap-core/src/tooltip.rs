// File: crates/heatmap-core/src/tooltip.rs
// Summary: Tooltip text formatting for hovered cells.

use crate::dataset::{month_name, MonthRecord};

/// The three tooltip lines for a record: "{year} - {Month}", the absolute
/// temperature, and the signed variance (explicit `+` for positive values),
/// both to 1 decimal.
pub fn tooltip_lines(record: &MonthRecord, base_temperature: f64) -> [String; 3] {
    let temp = record.temperature(base_temperature);
    let sign = if record.variance > 0.0 { "+" } else { "" };
    [
        format!("{} - {}", record.year, month_name(record.month_index())),
        format!("{temp:.1}°C"),
        format!("{sign}{:.1}°C", record.variance),
    ]
}

/// Tooltip lines joined with newlines; what goes into a cell's `<title>`.
pub fn tooltip_text(record: &MonthRecord, base_temperature: f64) -> String {
    tooltip_lines(record, base_temperature).join("\n")
}
