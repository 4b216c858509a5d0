use crate::cli::commands::{open_tracker, resolve_filter};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::summary::EntryFilter;
use crate::ui::messages::{header, info};
use crate::utils::date::local_day;
use crate::utils::formatting::{bold, ms_to_hm, truncate};
use crate::utils::table::Table;
use crate::utils::time::fmt_local;

const NOTE_WIDTH: usize = 40;

/// Human readable form of the active range, for headers.
pub(crate) fn describe_filter(filter: &EntryFilter) -> String {
    let range = match (filter.from, filter.to) {
        (None, None) => "all dates".to_string(),
        (Some(f), Some(t)) if f == t => f.to_string(),
        (Some(f), Some(t)) => format!("{f} – {t}"),
        (Some(f), None) => format!("from {f}"),
        (None, Some(t)) => format!("until {t}"),
    };

    match &filter.category {
        Some(c) => format!("{range}, {c}"),
        None => range,
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter } = &cli.command {
        let tracker = open_tracker(cli, cfg)?;
        let filter = resolve_filter(filter, cfg, local_day(&tracker.now()))?;
        let summary = tracker.summary(&filter);

        header(format!("Entries ({})", describe_filter(&filter)));

        if summary.entries.is_empty() {
            info("No entries for the selected range.");
            return Ok(());
        }

        let mut table = Table::new(&["ID", "Start", "Ende", "Dauer", "Kategorie", "Notiz"]).align_right(3);
        for e in &summary.entries {
            table.add_row(vec![
                e.short_id().to_string(),
                fmt_local(&e.start),
                fmt_local(&e.end),
                ms_to_hm(e.duration_ms),
                e.category.clone(),
                truncate(&e.note, NOTE_WIDTH),
            ]);
        }
        print!("{}", table.render());

        println!();
        println!(
            "{} entries, total {}",
            summary.entries.len(),
            bold(&ms_to_hm(summary.grand_total_ms))
        );
    }

    Ok(())
}
