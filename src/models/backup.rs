use crate::models::entry::TimeEntry;
use crate::models::settings::Settings;
use crate::models::timer::TimerState;
use crate::utils::time::iso_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const BACKUP_VERSION: u32 = 1;

/// Full snapshot written by `backup` and read back by `restore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub entries: Vec<TimeEntry>,
    pub categories: Vec<String>,
    pub state: TimerState,
    pub settings: Settings,
    #[serde(with = "iso_millis")]
    pub exported_at: DateTime<Utc>,
    pub version: u32,
}
