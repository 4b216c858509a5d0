// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{CSV_HEADERS, entry_to_row};
use crate::export::notify_export_success;
use crate::models::entry::TimeEntry;
use crate::ui::messages::info;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

fn csv_error(stage: &str, e: impl std::fmt::Display) -> AppError {
    AppError::from(io::Error::other(format!("CSV {stage} error: {e}")))
}

/// Export JSON pretty-printed (same shape as the stored entries).
pub(crate) fn export_json(entries: &[TimeEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(entries)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Write the `;`-separated entry table (header included) to `out`.
///
/// Cells are never quoted; separators inside values are replaced beforehand.
pub fn write_csv<W: Write>(entries: &[TimeEntry], out: W) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    wtr.write_record(CSV_HEADERS)
        .map_err(|e| csv_error("write", e))?;

    for e in entries {
        wtr.write_record(entry_to_row(e))
            .map_err(|e| csv_error("write", e))?;
    }

    wtr.flush().map_err(|e| csv_error("flush", e))?;
    Ok(())
}

pub(crate) fn export_csv(entries: &[TimeEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(entries, file)?;

    notify_export_success("CSV", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_timestamp;

    #[test]
    fn csv_layout() {
        let start = parse_timestamp("2026-01-05T08:00:00Z").unwrap();
        let mut e = TimeEntry::new(start, 90 * 60_000, "Unterricht", "Mathe 7b");
        e.id = "abc".into();

        let mut buf = Vec::new();
        write_csv(&[e], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "ID;Start;Ende;Dauer (hh:mm);Dauer (Min);Kategorie;Notiz\n\
             abc;2026-01-05T08:00:00.000Z;2026-01-05T09:30:00.000Z;01:30;90;Unterricht;Mathe 7b\n"
        );
    }

    #[test]
    fn empty_list_is_header_only() {
        let mut buf = Vec::new();
        write_csv(&[], &mut buf).unwrap();
        assert_eq!(buf.iter().filter(|b| **b == b'\n').count(), 1);
    }

    #[test]
    fn multiline_category_stays_on_one_row() {
        let start = parse_timestamp("2026-01-05T08:00:00Z").unwrap();
        let e = TimeEntry::new(start, 60_000, "Eltern\nabend", "x");

        let mut buf = Vec::new();
        write_csv(&[e], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().count(), 2);
        assert!(text.contains(";Eltern abend;x\n"));
    }
}
