// src/export/model.rs

use crate::models::entry::TimeEntry;
use crate::utils::formatting::{ms_to_hm, ms_to_minutes};
use crate::utils::time::{fmt_local, to_iso};

pub const CSV_HEADERS: [&str; 7] = [
    "ID",
    "Start",
    "Ende",
    "Dauer (hh:mm)",
    "Dauer (Min)",
    "Kategorie",
    "Notiz",
];

/// `;` separates columns and `\n` rows, so neither may appear inside a cell.
fn sanitize_cell(s: &str) -> String {
    s.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace(';', ",")
}

/// CSV row: ISO-8601 timestamps as stored.
pub(crate) fn entry_to_row(e: &TimeEntry) -> Vec<String> {
    vec![
        e.id.clone(),
        to_iso(&e.start),
        to_iso(&e.end),
        ms_to_hm(e.duration_ms),
        ms_to_minutes(e.duration_ms).to_string(),
        sanitize_cell(&e.category),
        sanitize_cell(&e.note),
    ]
}

/// Spreadsheet row: local wall-clock timestamps, picked up as Excel dates.
pub(crate) fn entry_to_sheet_row(e: &TimeEntry) -> Vec<String> {
    vec![
        e.id.clone(),
        fmt_local(&e.start),
        fmt_local(&e.end),
        ms_to_hm(e.duration_ms),
        ms_to_minutes(e.duration_ms).to_string(),
        e.category.clone(),
        e.note.clone(),
    ]
}
