use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { category, note } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;

        if category.is_none() && note.is_none() {
            let t = &tracker.state().timer;
            info(format!("Category: {}", t.category));
            info(format!("Note:     {}", t.note));
            return Ok(());
        }

        let timer = tracker.set_defaults(category.as_deref(), note.as_deref())?;
        let scope = if timer.is_running() {
            "Running session"
        } else {
            "Next session"
        };
        success(format!("{scope}: {} / '{}'", timer.category, timer.note));
    }

    Ok(())
}
