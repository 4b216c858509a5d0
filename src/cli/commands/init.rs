use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::state::AppState;
use crate::db::log::ttlog_quiet;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - the SQLite store and its schema
///  - the default documents of a fresh store
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info("Initializing arbeitszeit…");

    let store = Store::open(&db_path)?;

    if store.document_count()? == 0 {
        AppState::default().persist_all(&store)?;
    }

    ttlog_quiet(
        store.conn(),
        "init",
        &db_path,
        &format!("Database initialized at {db_path}"),
    );

    success(format!("Database initialized at {db_path}"));
    Ok(())
}
