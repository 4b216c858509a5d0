use crate::db::store::{KEY_CATEGORIES, KEY_ENTRIES, KEY_SETTINGS, KEY_STATE, Store};
use crate::errors::AppResult;
use crate::models::backup::{BACKUP_VERSION, BackupDocument};
use crate::models::category::{dedup_preserving_order, default_categories, first_or_fallback};
use crate::models::entry::TimeEntry;
use crate::models::settings::Settings;
use crate::models::timer::TimerState;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

/// In-memory copy of the four persisted documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub entries: Vec<TimeEntry>,
    pub categories: Vec<String>,
    pub timer: TimerState,
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        let categories = default_categories();
        let timer = TimerState::idle(first_or_fallback(&categories), "");
        Self {
            entries: Vec::new(),
            categories,
            timer,
            settings: Settings::default(),
        }
    }
}

impl AppState {
    /// Read all documents, each falling back to its default on its own.
    pub fn load(store: &Store) -> AppResult<Self> {
        Self::read(store, true)
    }

    /// Same as [`AppState::load`] without writing anything to the store.
    pub fn peek(store: &Store) -> AppResult<Self> {
        Self::read(store, false)
    }

    fn read(store: &Store, audit: bool) -> AppResult<Self> {
        let defaults = Self::default();

        let entries = document(store, KEY_ENTRIES, defaults.entries, audit)?;
        let categories =
            dedup_preserving_order(document(store, KEY_CATEGORIES, defaults.categories, audit)?);
        let timer = document(
            store,
            KEY_STATE,
            TimerState::idle(first_or_fallback(&categories), ""),
            audit,
        )?;
        let settings = document(store, KEY_SETTINGS, defaults.settings, audit)?;

        Ok(Self {
            entries,
            categories,
            timer,
            settings,
        }
        .normalized())
    }

    /// Drop a `running` flag that has no start time. An idle timer whose
    /// category is blank or no longer listed gets the first category.
    pub fn normalized(mut self) -> Self {
        if !self.timer.is_running() {
            self.timer.running = false;
            self.timer.start_time = None;
        }
        let category = self.timer.category.trim();
        let unlisted = !self.timer.running && !self.categories.iter().any(|c| c == category);
        if category.is_empty() || unlisted {
            self.timer.category = first_or_fallback(&self.categories).to_string();
        }
        self
    }

    pub fn persist_entries(&self, store: &Store) -> AppResult<()> {
        store.save(KEY_ENTRIES, &self.entries)
    }

    pub fn persist_categories(&self, store: &Store) -> AppResult<()> {
        store.save(KEY_CATEGORIES, &self.categories)
    }

    pub fn persist_timer(&self, store: &Store) -> AppResult<()> {
        store.save(KEY_STATE, &self.timer)
    }

    pub fn persist_settings(&self, store: &Store) -> AppResult<()> {
        store.save(KEY_SETTINGS, &self.settings)
    }

    /// Entries and timer together, in one transaction (used by stop).
    pub fn persist_entries_and_timer(&self, store: &Store) -> AppResult<()> {
        store.save_many(&[
            (KEY_ENTRIES, serde_json::to_string(&self.entries)?),
            (KEY_STATE, serde_json::to_string(&self.timer)?),
        ])
    }

    /// All four documents in one transaction (used by restore).
    pub fn persist_all(&self, store: &Store) -> AppResult<()> {
        store.save_many(&[
            (KEY_ENTRIES, serde_json::to_string(&self.entries)?),
            (KEY_CATEGORIES, serde_json::to_string(&self.categories)?),
            (KEY_STATE, serde_json::to_string(&self.timer)?),
            (KEY_SETTINGS, serde_json::to_string(&self.settings)?),
        ])
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> BackupDocument {
        BackupDocument {
            entries: self.entries.clone(),
            categories: self.categories.clone(),
            state: self.timer.clone(),
            settings: self.settings,
            exported_at: now,
            version: BACKUP_VERSION,
        }
    }
}

fn document<T: DeserializeOwned>(
    store: &Store,
    key: &str,
    fallback: T,
    audit: bool,
) -> AppResult<T> {
    if audit {
        store.load(key, fallback)
    } else {
        store.peek(key, fallback)
    }
}
