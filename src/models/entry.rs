use crate::models::null_as_empty;
use crate::utils::time::iso_millis;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed work session.
///
/// Stored as `{ id, start, end, durationMs, category, note }` with ISO-8601
/// timestamps. `end - start == duration_ms` holds for every entry the
/// tracker creates or edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    #[serde(with = "iso_millis")]
    pub start: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub end: DateTime<Utc>,
    pub duration_ms: i64,
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub note: String,
}

impl TimeEntry {
    /// New entry with a fresh v4 id; `end` is derived from the duration.
    pub fn new(start: DateTime<Utc>, duration_ms: i64, category: &str, note: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start,
            end: start + Duration::milliseconds(duration_ms),
            duration_ms,
            category: category.to_string(),
            note: note.to_string(),
        }
    }

    /// First 8 characters of the id, enough to address an entry on the CLI.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    pub fn is_consistent(&self) -> bool {
        (self.end - self.start).num_milliseconds() == self.duration_ms && self.duration_ms >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_entry_derives_end() {
        let start = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();
        let e = TimeEntry::new(start, 90 * 60_000, "Unterricht", "");
        assert_eq!(e.end, Utc.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap());
        assert!(e.is_consistent());
        assert_eq!(e.short_id().len(), 8);
    }

    #[test]
    fn reads_browser_document() {
        let raw = r#"{"id":"1736064000000","start":"2026-01-05T08:00:00.000Z",
            "end":"2026-01-05T09:30:00.000Z","durationMs":5400000,
            "category":"Unterricht","note":null}"#;
        let e: TimeEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(e.duration_ms, 5_400_000);
        assert_eq!(e.note, "");
        assert!(e.is_consistent());

        let back = serde_json::to_value(&e).unwrap();
        assert_eq!(back["start"], "2026-01-05T08:00:00.000Z");
        assert_eq!(back["durationMs"], 5_400_000);
    }
}
