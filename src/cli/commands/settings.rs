use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings { rounding5 } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;

        if let Some(toggle) = rounding5 {
            tracker.set_rounding(toggle.enabled())?;
            success("Settings saved.");
        }

        let on_off = |b: bool| if b { "on" } else { "off" };
        info(format!(
            "rounding5: {}",
            on_off(tracker.state().settings.rounding5)
        ));
    }

    Ok(())
}
