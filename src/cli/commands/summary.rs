use crate::cli::commands::list::describe_filter;
use crate::cli::commands::{open_tracker, resolve_filter};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date::local_day;
use crate::utils::formatting::{bold, ms_to_hm};
use crate::utils::table::Table;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { filter } = &cli.command {
        let tracker = open_tracker(cli, cfg)?;
        let filter = resolve_filter(filter, cfg, local_day(&tracker.now()))?;
        let summary = tracker.summary(&filter);

        header(format!("Summary ({})", describe_filter(&filter)));
        println!("Today: {}", colorize_optional(&ms_to_hm(summary.today_total_ms)));
        println!();

        if summary.categories.is_empty() {
            info("No entries for the selected range.");
            return Ok(());
        }

        let mut table = Table::new(&["Kategorie", "Dauer"]).align_right(1);
        for c in &summary.categories {
            table.add_row(vec![c.category.clone(), ms_to_hm(c.total_ms)]);
        }
        print!("{}", table.render());

        println!();
        println!("Total: {}", bold(&ms_to_hm(summary.grand_total_ms)));
    }

    Ok(())
}
