use crate::models::entry::TimeEntry;
use chrono::NaiveDate;
use serde::Serialize;

/// Date range (inclusive, whole local days) and category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total_ms: i64,
}

/// Everything the overview shows for one filter.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub today_total_ms: i64,
    /// Filtered entries, most recent first.
    pub entries: Vec<TimeEntry>,
    /// Per-category totals, largest first.
    pub categories: Vec<CategoryTotal>,
    pub grand_total_ms: i64,
}
