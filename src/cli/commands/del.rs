use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::fs_utils::confirm;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::ms_to_hm;
use crate::utils::time::fmt_local;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;

        let Some(entry) = tracker.find_entry(id)?.cloned() else {
            warning(format!("No entry matches '{id}', nothing deleted."));
            return Ok(());
        };

        if !*yes {
            warning(format!(
                "Delete entry {} ({} {} {})? This action is irreversible.",
                entry.short_id(),
                fmt_local(&entry.start),
                ms_to_hm(entry.duration_ms),
                entry.category
            ));
            if !confirm("Confirm")? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        if let Some(removed) = tracker.delete_entry(&entry.id)? {
            success(format!("Entry {} has been deleted.", removed.short_id()));
        }
    }

    Ok(())
}
