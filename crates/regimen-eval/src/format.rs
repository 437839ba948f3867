//! Report-cell formatting
//!
//! Episode ranges render as `DD/MM/YYYY - DD/MM/YYYY` with the literal
//! `Unknown` standing in for an absent bound. A patient's episodes join
//! into one spreadsheet cell, one episode per line.

use chrono::NaiveDateTime;
use regimen_types::EpisodeRange;

/// Placeholder for an absent bound
pub const UNKNOWN_DATE: &str = "Unknown";
/// Separator between the bounds of one range
pub const BOUND_SEPARATOR: &str = " - ";
/// Separator between ranges within one report cell
pub const CELL_SEPARATOR: &str = "\n";

const DATE_FORMAT: &str = "%d/%m/%Y";

fn format_bound(bound: Option<NaiveDateTime>) -> String {
    match bound {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Render one episode range for display.
pub fn format_range(range: &EpisodeRange) -> String {
    format!(
        "{}{}{}",
        format_bound(range.start()),
        BOUND_SEPARATOR,
        format_bound(range.stop())
    )
}

/// Join rendered ranges into a single report-cell value.
///
/// Emission order is preserved; an empty list renders as the empty string.
pub fn join_cell(ranges: &[EpisodeRange]) -> String {
    ranges
        .iter()
        .map(format_range)
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}
