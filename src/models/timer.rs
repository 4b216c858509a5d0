use crate::models::null_as_empty;
use crate::utils::time::iso_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single timer document: `{ running, startTime, category, note }`.
///
/// While idle, `category` and `note` hold the defaults for the next session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerState {
    pub running: bool,
    #[serde(with = "iso_millis::option")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running { since: DateTime<Utc> },
}

impl TimerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running { .. } => "running",
        }
    }
}

impl TimerState {
    pub fn idle(category: &str, note: &str) -> Self {
        Self {
            running: false,
            start_time: None,
            category: category.to_string(),
            note: note.to_string(),
        }
    }

    /// A `running` flag without a start time is read as idle.
    pub fn phase(&self) -> TimerPhase {
        match (self.running, self.start_time) {
            (true, Some(since)) => TimerPhase::Running { since },
            _ => TimerPhase::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase(), TimerPhase::Running { .. })
    }
}
