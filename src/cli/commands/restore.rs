use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;
        let path = expand_tilde(file);

        // parse and validate everything before touching the store
        let raw = BackupLogic::read_backup_file(&path)?;
        let next = BackupLogic::parse_restore(tracker.state(), &raw)?;
        tracker.replace_all(next, &path.to_string_lossy())?;

        let s = tracker.state();
        success(format!(
            "Restored {} entries and {} categories from {}",
            s.entries.len(),
            s.categories.len(),
            path.display()
        ));
    }

    Ok(())
}
