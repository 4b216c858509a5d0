use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::fmt_local_time;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { category, note } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;
        let timer = tracker.start(category.as_deref(), note.as_deref())?;

        let since = timer
            .start_time
            .map(|t| fmt_local_time(&t))
            .unwrap_or_default();
        let note = if timer.note.is_empty() {
            String::new()
        } else {
            format!(" ({})", timer.note)
        };

        success(format!("Timer started at {since}: {}{note}", timer.category));
    }

    Ok(())
}
