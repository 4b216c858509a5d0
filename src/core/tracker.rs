//! Application controller: owns the store and the in-memory state, applies
//! one operation at a time and persists the touched documents right after.

use crate::core::repository::{EntryEdit, EntryRepository, resolve_id};
use crate::core::state::AppState;
use crate::core::summary;
use crate::core::timer::TimerLogic;
use crate::db::log::ttlog_quiet;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::summary::{EntryFilter, Summary};
use crate::models::timer::TimerState;
use crate::utils::clock::Clock;
use crate::utils::formatting::ms_to_hm;
use chrono::{DateTime, Utc};

pub struct Tracker {
    store: Store,
    state: AppState,
    clock: Box<dyn Clock>,
}

impl Tracker {
    pub fn open(db_path: &str, clock: Box<dyn Clock>) -> AppResult<Self> {
        Self::with_store(Store::open(db_path)?, clock)
    }

    pub fn with_store(store: Store, clock: Box<dyn Clock>) -> AppResult<Self> {
        let state = AppState::load(&store)?;
        Ok(Self {
            store,
            state,
            clock,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Re-read all documents (another process may have changed them).
    /// Read-only: unlike opening, corrupt documents are not audited again.
    pub fn refresh(&mut self) -> AppResult<()> {
        self.state = AppState::peek(&self.store)?;
        Ok(())
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(self.store.conn(), operation, target, message);
    }

    fn known_category(&self, name: &str) -> AppResult<String> {
        let name = name.trim();
        if self.state.categories.iter().any(|c| c == name) {
            Ok(name.to_string())
        } else {
            Err(AppError::UnknownCategory(name.to_string()))
        }
    }

    // ---------------------------
    // Timer
    // ---------------------------

    /// Start the timer. Missing category/note take the stored idle defaults.
    pub fn start(&mut self, category: Option<&str>, note: Option<&str>) -> AppResult<&TimerState> {
        if self.state.timer.is_running() {
            return Err(AppError::InvalidTransition {
                action: "start",
                state: "already running",
            });
        }

        let category = match category {
            Some(c) => self.known_category(c)?,
            None => self.known_category(&self.state.timer.category)?,
        };
        let note = note.map(str::to_string).unwrap_or_else(|| self.state.timer.note.clone());
        let now = self.now();

        let mut next = self.state.clone();
        TimerLogic::start(&mut next.timer, &category, &note, now)?;
        next.persist_timer(&self.store)?;
        self.state = next;
        self.audit("start", &category, &format!("Timer started at {}", now.to_rfc3339()));

        Ok(&self.state.timer)
    }

    /// Stop the timer and record the finished entry. Memory is only updated
    /// once both documents are written.
    pub fn stop(&mut self) -> AppResult<TimeEntry> {
        let now = self.now();
        let mut next = self.state.clone();
        let entry = TimerLogic::stop(&mut next.timer, &next.settings, now)?;

        EntryRepository::new(&mut next.entries).add(entry.clone());
        next.persist_entries_and_timer(&self.store)?;
        self.state = next;
        self.audit(
            "stop",
            &entry.id,
            &format!("{} {}", entry.category, ms_to_hm(entry.duration_ms)),
        );

        Ok(entry)
    }

    /// Update the idle defaults, or the running session's category/note.
    pub fn set_defaults(
        &mut self,
        category: Option<&str>,
        note: Option<&str>,
    ) -> AppResult<&TimerState> {
        let category = category.map(|c| self.known_category(c)).transpose()?;

        TimerLogic::amend(&mut self.state.timer, category.as_deref(), note);
        self.state.persist_timer(&self.store)?;
        self.audit(
            "set",
            &self.state.timer.category,
            &format!("note '{}'", self.state.timer.note),
        );

        Ok(&self.state.timer)
    }

    pub fn elapsed(&self) -> i64 {
        TimerLogic::elapsed(&self.state.timer, self.now())
    }

    // ---------------------------
    // Categories
    // ---------------------------

    /// Append a category. While idle it also becomes the default for the
    /// next start.
    pub fn add_category(&mut self, name: &str) -> AppResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyCategory);
        }
        if self.state.categories.iter().any(|c| c == name) {
            return Err(AppError::DuplicateCategory(name.to_string()));
        }

        self.state.categories.push(name.to_string());
        self.state.persist_categories(&self.store)?;

        if !self.state.timer.is_running() {
            TimerLogic::amend(&mut self.state.timer, Some(name), None);
            self.state.persist_timer(&self.store)?;
        }

        self.audit("category", name, "Category added");
        Ok(name.to_string())
    }

    // ---------------------------
    // Entries
    // ---------------------------

    pub fn edit_entry(&mut self, key: &str, edit: EntryEdit) -> AppResult<TimeEntry> {
        let id = resolve_id(&self.state.entries, key)?
            .map(|e| e.id.clone())
            .ok_or_else(|| AppError::EntryNotFound(key.to_string()))?;

        let edited = EntryRepository::new(&mut self.state.entries)
            .edit(&id, edit)?
            .clone();
        self.state.persist_entries(&self.store)?;
        self.audit(
            "edit",
            &id,
            &format!("{} {}", edited.category, ms_to_hm(edited.duration_ms)),
        );

        Ok(edited)
    }

    /// Delete the entry addressed by `key`; `Ok(None)` when nothing matched.
    pub fn delete_entry(&mut self, key: &str) -> AppResult<Option<TimeEntry>> {
        let Some(id) = resolve_id(&self.state.entries, key)?.map(|e| e.id.clone()) else {
            return Ok(None);
        };

        let removed = EntryRepository::new(&mut self.state.entries).delete(&id);
        if let Some(e) = &removed {
            self.state.persist_entries(&self.store)?;
            self.audit("del", &e.id, &format!("{} {}", e.category, ms_to_hm(e.duration_ms)));
        }

        Ok(removed)
    }

    pub fn find_entry(&self, key: &str) -> AppResult<Option<&TimeEntry>> {
        resolve_id(&self.state.entries, key)
    }

    // ---------------------------
    // Settings
    // ---------------------------

    pub fn set_rounding(&mut self, enabled: bool) -> AppResult<()> {
        self.state.settings.rounding5 = enabled;
        self.state.persist_settings(&self.store)?;
        self.audit(
            "settings",
            "rounding5",
            if enabled { "enabled" } else { "disabled" },
        );
        Ok(())
    }

    // ---------------------------
    // Views
    // ---------------------------

    pub fn summary(&self, filter: &EntryFilter) -> Summary {
        summary::summarize(&self.state.entries, filter, self.now())
    }

    pub fn today_total(&self) -> i64 {
        summary::today_total(&self.state.entries, self.now())
    }

    // ---------------------------
    // Restore
    // ---------------------------

    /// Swap in a complete state (restore). All documents are written in one
    /// transaction; on failure the previous in-memory state is kept.
    pub fn replace_all(&mut self, next: AppState, source: &str) -> AppResult<()> {
        next.persist_all(&self.store)?;
        self.state = next;
        self.audit(
            "restore",
            source,
            &format!("{} entries restored", self.state.entries.len()),
        );
        Ok(())
    }
}
