use crate::cli::commands::db_path;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::store::Store;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(cli.command, Commands::Log { print: true }) {
        let store = Store::open(&db_path(cfg))?;
        LogLogic::print_log(&store)?;
    }

    Ok(())
}
