// src/export/logic.rs

use crate::core::summary::filter_entries;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::entry::TimeEntry;
use crate::models::summary::EntryFilter;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ExportLogic;

impl ExportLogic {
    /// `arbeitszeit_YYYY-MM-DD.<ext>`
    pub fn default_file_name(format: ExportFormat, today: NaiveDate) -> String {
        format!("arbeitszeit_{}.{}", today.format("%Y-%m-%d"), format.as_str())
    }

    /// Export the entries matching `filter` (most recent first).
    ///
    /// An empty selection still produces a file containing only the header.
    /// Returns the number of exported entries.
    pub fn export(
        entries: &[TimeEntry],
        filter: &EntryFilter,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(path, force)?;

        let selected = filter_entries(entries, filter);

        if selected.is_empty() {
            warning("No entries found for the selected range.");
        }

        match format {
            ExportFormat::Csv => export_csv(&selected, path)?,
            ExportFormat::Json => export_json(&selected, path)?,
            ExportFormat::Xlsx => export_xlsx(&selected, path)?,
        }

        Ok(selected.len())
    }

    /// Output path: the given file, or the default name in the current directory.
    pub fn resolve_path(file: Option<&str>, format: ExportFormat, today: NaiveDate) -> PathBuf {
        match file {
            Some(f) => crate::utils::path::expand_tilde(f),
            None => PathBuf::from(Self::default_file_name(format, today)),
        }
    }
}
