use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::local_day;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = &cli.command
    {
        let tracker = open_tracker(cli, cfg)?;
        let now = tracker.now();

        let dest = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(BackupLogic::default_file_name(local_day(&now))),
        };

        let doc = tracker.state().snapshot(now);
        let written = BackupLogic::write_backup(&doc, &dest, *compress, *force)?;

        success(format!(
            "Backup created: {} ({} entries)",
            written.display(),
            doc.entries.len()
        ));

        ttlog_quiet(
            tracker.store().conn(),
            "backup",
            &written.to_string_lossy(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
    }

    Ok(())
}
