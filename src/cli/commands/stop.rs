use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::ms_to_hm;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Stop = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;
        let entry = tracker.stop()?;

        success(format!(
            "Stopped: {} {} [{}]",
            entry.category,
            ms_to_hm(entry.duration_ms),
            entry.short_id()
        ));
        info(format!("Today: {}", ms_to_hm(tracker.today_total())));
    }

    Ok(())
}
