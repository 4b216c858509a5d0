use crate::cli::commands::open_tracker;
use crate::cli::parser::{CategoryAction, Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::colors::{GREEN, RESET};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Category { action } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;

        match action {
            CategoryAction::Add { name } => {
                let added = tracker.add_category(name)?;
                success(format!("Category added: {added}"));
            }
            CategoryAction::List => {
                header("Categories");
                let current = &tracker.state().timer.category;
                for c in &tracker.state().categories {
                    if c == current {
                        println!("{GREEN}* {c}{RESET}");
                    } else {
                        println!("  {c}");
                    }
                }
            }
        }
    }

    Ok(())
}
