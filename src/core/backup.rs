use crate::core::state::AppState;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::models::backup::{BACKUP_VERSION, BackupDocument};
use crate::models::category::dedup_preserving_order;
use crate::models::entry::TimeEntry;
use crate::models::settings::Settings;
use crate::models::timer::TimerState;
use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

pub struct BackupLogic;

impl BackupLogic {
    /// `arbeitszeit_backup_YYYY-MM-DD.json`
    pub fn default_file_name(today: NaiveDate) -> String {
        format!("arbeitszeit_backup_{}.json", today.format("%Y-%m-%d"))
    }

    /// Write `doc` as pretty JSON to `dest`, or into `dest` with a `.zip`
    /// extension when `compress` is set. Returns the file actually written.
    pub fn write_backup(
        doc: &BackupDocument,
        dest: &Path,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let json = serde_json::to_string_pretty(doc)?;

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if let Some(parent) = final_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&final_path, force)?;

        if compress {
            let inner_name = dest
                .with_extension("json")
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "backup.json".to_string());
            write_zip(&final_path, &inner_name, json.as_bytes())?;
        } else {
            fs::write(&final_path, json)?;
        }

        Ok(final_path)
    }

    /// Read a backup file; `.zip` archives yield their first member.
    pub fn read_backup_file(path: &Path) -> AppResult<String> {
        let is_zip = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

        if !is_zip {
            return Ok(fs::read_to_string(path)?);
        }

        let file = fs::File::open(path)?;
        let mut archive =
            ZipArchive::new(file).map_err(|e| AppError::InvalidBackup(e.to_string()))?;
        let mut member = archive
            .by_index(0)
            .map_err(|e| AppError::InvalidBackup(e.to_string()))?;

        let mut text = String::new();
        member.read_to_string(&mut text)?;
        Ok(text)
    }

    /// Build the state a restore of `raw` would produce.
    ///
    /// `entries` must be present and valid. `categories`, `state` and
    /// `settings` replace the current values only when they have the right
    /// shape. Nothing is written here.
    pub fn parse_restore(current: &AppState, raw: &str) -> AppResult<AppState> {
        let doc: Value = serde_json::from_str(raw)
            .map_err(|e| AppError::InvalidBackup(format!("not a JSON document ({e})")))?;

        let Value::Object(mut doc) = doc else {
            return Err(AppError::InvalidBackup("expected a JSON object".into()));
        };

        if let Some(v) = doc.get("version").and_then(Value::as_u64)
            && v > u64::from(BACKUP_VERSION)
        {
            return Err(AppError::InvalidBackup(format!(
                "unsupported version {v} (max {BACKUP_VERSION})"
            )));
        }

        let entries = match doc.remove("entries") {
            Some(v @ Value::Array(_)) => serde_json::from_value::<Vec<TimeEntry>>(v)
                .map_err(|e| AppError::InvalidBackup(format!("bad entry: {e}")))?,
            Some(_) => return Err(AppError::InvalidBackup("'entries' is not a list".into())),
            None => return Err(AppError::InvalidBackup("missing 'entries'".into())),
        };

        let categories = match doc.remove("categories") {
            Some(v @ Value::Array(_)) => {
                serde_json::from_value::<Vec<String>>(v).unwrap_or_else(|_| current.categories.clone())
            }
            _ => current.categories.clone(),
        };

        let timer = match doc.remove("state") {
            Some(v @ Value::Object(_)) => {
                serde_json::from_value::<TimerState>(v).unwrap_or_else(|_| current.timer.clone())
            }
            _ => current.timer.clone(),
        };

        let settings = match doc.remove("settings") {
            Some(v @ Value::Object(_)) => {
                serde_json::from_value::<Settings>(v).unwrap_or(current.settings)
            }
            _ => current.settings,
        };

        Ok(AppState {
            entries,
            categories: dedup_preserving_order(categories),
            timer,
            settings,
        }
        .normalized())
    }
}

fn write_zip(zip_path: &Path, inner_name: &str, bytes: &[u8]) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(inner_name, options)
        .map_err(std::io::Error::other)?;
    zip.write_all(bytes)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_timestamp;
    use std::env;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("arbeitszeit_backup_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn populated() -> AppState {
        let mut s = AppState::default();
        let start = parse_timestamp("2026-01-05T08:00:00Z").unwrap();
        s.entries.push(TimeEntry::new(start, 90 * 60_000, "Unterricht", "7b"));
        s.settings.rounding5 = true;
        s
    }

    #[test]
    fn snapshot_restores_to_same_state() {
        let state = populated();
        let now = parse_timestamp("2026-01-05T18:00:00Z").unwrap();
        let json = serde_json::to_string(&state.snapshot(now)).unwrap();

        let restored = BackupLogic::parse_restore(&AppState::default(), &json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn missing_entries_is_rejected() {
        let current = populated();
        for raw in [
            r#"{"categories":["A"]}"#,
            r#"{"entries":{}}"#,
            r#"[1,2,3]"#,
            "not json at all",
        ] {
            assert!(
                matches!(
                    BackupLogic::parse_restore(&current, raw),
                    Err(AppError::InvalidBackup(_))
                ),
                "accepted: {raw}"
            );
        }
    }

    #[test]
    fn wrong_shaped_sections_keep_current_values() {
        let current = populated();
        let raw = r#"{"entries":[],"categories":"x","state":[1],"settings":7}"#;
        let restored = BackupLogic::parse_restore(&current, raw).unwrap();

        assert!(restored.entries.is_empty());
        assert_eq!(restored.categories, current.categories);
        assert_eq!(restored.timer, current.timer);
        assert_eq!(restored.settings, current.settings);
    }

    #[test]
    fn categories_are_deduplicated() {
        let raw = r#"{"entries":[],"categories":["A","B","A"]}"#;
        let restored = BackupLogic::parse_restore(&AppState::default(), raw).unwrap();
        assert_eq!(restored.categories, vec!["A", "B"]);
    }

    #[test]
    fn restored_idle_default_must_be_listed() {
        let raw = r#"{"entries":[],"categories":["A","B"],
            "state":{"running":false,"startTime":null,"category":"Gartenarbeit","note":""}}"#;
        let restored = BackupLogic::parse_restore(&AppState::default(), raw).unwrap();
        assert_eq!(restored.timer.category, "A");
    }

    #[test]
    fn newer_version_is_rejected() {
        let raw = r#"{"entries":[],"version":2}"#;
        assert!(BackupLogic::parse_restore(&AppState::default(), raw).is_err());
    }

    #[test]
    fn compressed_backup_reads_back() {
        let dir = temp_dir("zip");
        let now = parse_timestamp("2026-01-05T18:00:00Z").unwrap();
        let doc = populated().snapshot(now);

        let written =
            BackupLogic::write_backup(&doc, &dir.join("snap.json"), true, true).unwrap();
        assert_eq!(written.extension().unwrap(), "zip");

        let text = BackupLogic::read_backup_file(&written).unwrap();
        let back = BackupLogic::parse_restore(&AppState::default(), &text).unwrap();
        assert_eq!(back.entries, doc.entries);

        let _ = fs::remove_dir_all(&dir);
    }
}
