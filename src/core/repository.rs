//! In-memory entry collection. Callers persist after each mutation.

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::utils::time::to_iso;
use chrono::{DateTime, Utc};

/// Replacement values for [`EntryRepository::edit`]. Blank category or note
/// keep the previous value.
#[derive(Debug, Clone)]
pub struct EntryEdit {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub category: Option<String>,
    pub note: Option<String>,
}

pub struct EntryRepository<'a> {
    entries: &'a mut Vec<TimeEntry>,
}

impl<'a> EntryRepository<'a> {
    pub fn new(entries: &'a mut Vec<TimeEntry>) -> Self {
        Self { entries }
    }

    pub fn add(&mut self, entry: TimeEntry) {
        self.entries.push(entry);
    }

    /// Replace start/end/category/note of entry `id` and recompute its
    /// duration. `end <= start` is rejected and nothing changes.
    pub fn edit(&mut self, id: &str, edit: EntryEdit) -> AppResult<&TimeEntry> {
        if edit.end <= edit.start {
            return Err(AppError::InvalidTimes {
                start: to_iso(&edit.start),
                end: to_iso(&edit.end),
            });
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

        entry.start = edit.start;
        entry.end = edit.end;
        entry.duration_ms = (edit.end - edit.start).num_milliseconds();

        if let Some(c) = non_blank(edit.category.as_deref()) {
            entry.category = c.to_string();
        }
        if let Some(n) = non_blank(edit.note.as_deref()) {
            entry.note = n.to_string();
        }

        Ok(entry)
    }

    /// Remove entry `id`. Returns the removed entry; an unknown id is a no-op.
    pub fn delete(&mut self, id: &str) -> Option<TimeEntry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx))
    }

    pub fn all(&self) -> &[TimeEntry] {
        self.entries.as_slice()
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Find the entry addressed by a full id or a unique id prefix.
///
/// `Ok(None)` when nothing matches; an exact id always wins over prefixes.
pub fn resolve_id<'e>(entries: &'e [TimeEntry], key: &str) -> AppResult<Option<&'e TimeEntry>> {
    let key = key.trim();
    if key.is_empty() {
        return Ok(None);
    }

    if let Some(exact) = entries.iter().find(|e| e.id == key) {
        return Ok(Some(exact));
    }

    let mut matches = entries.iter().filter(|e| e.id.starts_with(key));
    match (matches.next(), matches.next()) {
        (None, _) => Ok(None),
        (Some(e), None) => Ok(Some(e)),
        (Some(_), Some(_)) => Err(AppError::AmbiguousId(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 28, h, m, 0).unwrap()
    }

    fn entry(id: &str, start: DateTime<Utc>, mins: i64) -> TimeEntry {
        let mut e = TimeEntry::new(start, mins * 60_000, "Unterricht", "5a");
        e.id = id.to_string();
        e
    }

    #[test]
    fn add_appends_without_dedup() {
        let mut list = Vec::new();
        let mut repo = EntryRepository::new(&mut list);
        let e = entry("a", t(8, 0), 45);
        repo.add(e.clone());
        repo.add(e);
        assert_eq!(repo.all().len(), 2);
    }

    #[test]
    fn edit_recomputes_duration_and_keeps_blank_fields() {
        let mut list = vec![entry("a", t(8, 0), 45)];
        let mut repo = EntryRepository::new(&mut list);

        let edited = repo
            .edit(
                "a",
                EntryEdit {
                    start: t(7, 45),
                    end: t(8, 30),
                    category: Some("  ".into()),
                    note: None,
                },
            )
            .unwrap()
            .clone();

        assert_eq!(edited.duration_ms, 45 * 60_000);
        assert_eq!(edited.category, "Unterricht");
        assert_eq!(edited.note, "5a");
        assert!(edited.is_consistent());

        let edited = repo
            .edit(
                "a",
                EntryEdit {
                    start: t(7, 45),
                    end: t(8, 30),
                    category: Some(" Korrekturen ".into()),
                    note: Some("Arbeiten 9c".into()),
                },
            )
            .unwrap();
        assert_eq!(edited.category, "Korrekturen");
        assert_eq!(edited.note, "Arbeiten 9c");
    }

    #[test]
    fn edit_with_end_not_after_start_changes_nothing() {
        let original = entry("a", t(8, 0), 45);
        let mut list = vec![original.clone()];
        let mut repo = EntryRepository::new(&mut list);

        for end in [t(8, 0), t(7, 0)] {
            let res = repo.edit(
                "a",
                EntryEdit {
                    start: t(8, 0),
                    end,
                    category: Some("Sonstiges".into()),
                    note: None,
                },
            );
            assert!(matches!(res, Err(AppError::InvalidTimes { .. })));
        }
        assert_eq!(list, vec![original]);
    }

    #[test]
    fn edit_unknown_id_is_not_found() {
        let mut list = vec![entry("a", t(8, 0), 45)];
        let mut repo = EntryRepository::new(&mut list);
        let res = repo.edit(
            "zzz",
            EntryEdit {
                start: t(8, 0),
                end: t(9, 0),
                category: None,
                note: None,
            },
        );
        assert!(matches!(res, Err(AppError::EntryNotFound(_))));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut list = vec![entry("a", t(8, 0), 45), entry("b", t(9, 0), 45)];
        let mut repo = EntryRepository::new(&mut list);
        assert_eq!(repo.delete("a").map(|e| e.id), Some("a".to_string()));
        assert!(repo.delete("a").is_none());
        assert_eq!(repo.all().len(), 1);
    }

    #[test]
    fn resolve_by_prefix() {
        let list = vec![
            entry("abc123", t(8, 0), 10),
            entry("abd456", t(9, 0), 10),
            entry("ab", t(10, 0), 10),
        ];
        assert_eq!(resolve_id(&list, "abc").unwrap().unwrap().id, "abc123");
        // exact id beats the ambiguous prefix
        assert_eq!(resolve_id(&list, "ab").unwrap().unwrap().id, "ab");
        assert!(matches!(
            resolve_id(&list[..2], "ab"),
            Err(AppError::AmbiguousId(_))
        ));
        assert!(resolve_id(&list, "x").unwrap().is_none());
        assert!(resolve_id(&list, "").unwrap().is_none());
    }
}
