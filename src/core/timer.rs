//! Two-state timer: Idle ⇄ Running.

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::settings::Settings;
use crate::models::timer::{TimerPhase, TimerState};
use chrono::{DateTime, Utc};

pub const ROUNDING_STEP_MS: i64 = 5 * 60 * 1000;

/// Nearest multiple of 5 minutes, exact halves round up.
pub fn round_to_5_minutes(ms: i64) -> i64 {
    (ms + ROUNDING_STEP_MS / 2).div_euclid(ROUNDING_STEP_MS) * ROUNDING_STEP_MS
}

pub struct TimerLogic;

impl TimerLogic {
    /// Idle → Running. The note is stored trimmed.
    pub fn start(
        state: &mut TimerState,
        category: &str,
        note: &str,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        if let TimerPhase::Running { .. } = state.phase() {
            return Err(AppError::InvalidTransition {
                action: "start",
                state: "already running",
            });
        }

        *state = TimerState {
            running: true,
            start_time: Some(now),
            category: category.to_string(),
            note: note.trim().to_string(),
        };
        Ok(())
    }

    /// Running → Idle, producing the finished entry.
    ///
    /// The measured duration is clamped at zero and optionally rounded; the
    /// entry's end is `start + duration`, so a rounded entry may end after
    /// the actual stop instant. Category and note stay as idle defaults.
    pub fn stop(
        state: &mut TimerState,
        settings: &Settings,
        now: DateTime<Utc>,
    ) -> AppResult<TimeEntry> {
        let TimerPhase::Running { since } = state.phase() else {
            return Err(AppError::InvalidTransition {
                action: "stop",
                state: "not running",
            });
        };

        let measured = (now - since).num_milliseconds().max(0);
        let duration = if settings.rounding5 {
            round_to_5_minutes(measured)
        } else {
            measured
        };

        let entry = TimeEntry::new(since, duration, &state.category, &state.note);
        *state = TimerState::idle(&entry.category, &entry.note);
        Ok(entry)
    }

    /// Change category and/or note. While idle these are the defaults for
    /// the next start; while running they amend the current session.
    pub fn amend(state: &mut TimerState, category: Option<&str>, note: Option<&str>) {
        if let Some(c) = category {
            state.category = c.to_string();
        }
        if let Some(n) = note {
            state.note = n.trim().to_string();
        }
    }

    /// Milliseconds since start, 0 when idle.
    pub fn elapsed(state: &TimerState, now: DateTime<Utc>) -> i64 {
        match state.phase() {
            TimerPhase::Running { since } => (now - since).num_milliseconds().max(0),
            TimerPhase::Idle => 0,
        }
    }
}
