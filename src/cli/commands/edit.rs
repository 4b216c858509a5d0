use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::repository::EntryEdit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::formatting::ms_to_hm;
use crate::utils::time::{fmt_local, parse_timestamp};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        start,
        end,
        category,
        note,
    } = &cli.command
    {
        let mut tracker = open_tracker(cli, cfg)?;

        let current = tracker
            .find_entry(id)?
            .cloned()
            .ok_or_else(|| AppError::EntryNotFound(id.clone()))?;

        // unparseable timestamps abort before anything changes
        let edit = EntryEdit {
            start: match start {
                Some(s) => parse_timestamp(s)?,
                None => current.start,
            },
            end: match end {
                Some(s) => parse_timestamp(s)?,
                None => current.end,
            },
            category: category.clone(),
            note: note.clone(),
        };

        let edited = tracker.edit_entry(&current.id, edit)?;

        success(format!(
            "Entry {} updated: {} – {} {} {}",
            edited.short_id(),
            fmt_local(&edited.start),
            fmt_local(&edited.end),
            ms_to_hm(edited.duration_ms),
            edited.category
        ));
    }

    Ok(())
}
