use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the store schema.
/// Delegates all table creation to the migration engine and returns the
/// migrations applied now (empty for an up-to-date store).
pub fn init_db(conn: &Connection) -> AppResult<Vec<&'static str>> {
    Ok(run_pending_migrations(conn)?)
}
