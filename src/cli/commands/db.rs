use crate::cli::commands::db_path;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::state::AppState;
use crate::db::log::log_count;
use crate::db::stats;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = &cli.command
    {
        let path = db_path(cfg);
        let store = Store::open(&path)?;

        //
        // 1) INFO
        //
        if *info {
            let state = AppState::load(&store)?;
            stats::print_db_info(
                &path,
                store.document_count()?,
                &state.entries,
                log_count(store.conn())?,
            )?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                store
                    .conn()
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.conn().execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
