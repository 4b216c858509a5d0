//! Key → JSON document store on top of SQLite.
//!
//! Each persisted value (entries, categories, timer state, settings) is one
//! row in `documents`, replaced as a whole on every save. Reads never fail
//! because of bad content: a missing, `null` or unparseable document yields
//! the caller's fallback, and the corruption is noted in the internal log.

use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const KEY_ENTRIES: &str = "tt_entries_v1";
pub const KEY_CATEGORIES: &str = "tt_categories_v1";
pub const KEY_STATE: &str = "tt_state_v1";
pub const KEY_SETTINGS: &str = "tt_settings_v1";

pub struct Store {
    pool: DbPool,
}

impl Store {
    /// Open (or create) the store file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Self::with_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::with_pool(DbPool::in_memory()?)
    }

    fn with_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Raw JSON text stored under `key`.
    pub fn raw(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self
            .pool
            .conn
            .query_row(
                "SELECT value FROM documents WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?)
    }

    /// Load a document, falling back to `fallback` when it is absent or
    /// cannot be read as `T`. Only SQLite failures are errors.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> AppResult<T> {
        self.read(key, fallback, true)
    }

    /// Like [`Store::load`], but never writes: a corrupt document is not
    /// noted in the internal log. Used by repeated refreshes.
    pub fn peek<T: DeserializeOwned>(&self, key: &str, fallback: T) -> AppResult<T> {
        self.read(key, fallback, false)
    }

    fn read<T: DeserializeOwned>(&self, key: &str, fallback: T, audit: bool) -> AppResult<T> {
        let Some(text) = self.raw(key)? else {
            return Ok(fallback);
        };

        match serde_json::from_str::<Option<T>>(&text) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Ok(fallback),
            Err(e) => {
                if audit {
                    ttlog_quiet(
                        self.conn(),
                        "load",
                        key,
                        &format!("Unreadable document replaced by defaults: {e}"),
                    );
                }
                Ok(fallback)
            }
        }
    }

    /// Replace the document under `key`.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        put(self.conn(), key, &json)
    }

    /// Replace several documents in one transaction: either all are written
    /// or none.
    pub fn save_many(&self, docs: &[(&str, String)]) -> AppResult<()> {
        let tx = self.pool.conn.unchecked_transaction()?;
        for (key, json) in docs {
            put(&tx, key, json)?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn document_count(&self) -> AppResult<i64> {
        Ok(self
            .pool
            .conn
            .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?)
    }
}

fn put(conn: &Connection, key: &str, json: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO documents (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, json, now],
    )?;
    Ok(())
}
