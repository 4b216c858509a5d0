//! Unified application error type.
//! All modules (db, core, cli, export, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Timer
    // ---------------------------
    #[error("Cannot {action}: the timer is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    // ---------------------------
    // Entries
    // ---------------------------
    #[error("Invalid times: end ({end}) must be after start ({start})")]
    InvalidTimes { start: String, end: String },

    #[error("No entry found for id '{0}'")]
    EntryNotFound(String),

    #[error("Id prefix '{0}' matches more than one entry")]
    AmbiguousId(String),

    // ---------------------------
    // Categories
    // ---------------------------
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    #[error("Category name must not be empty")]
    EmptyCategory,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Invalid backup: {0}")]
    InvalidBackup(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
