use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::models::timer::TimerPhase;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_running, colorize_optional};
use crate::utils::formatting::{ms_to_hm, ms_to_hms};
use crate::utils::time::fmt_local_time;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const WATCH_INTERVAL: Duration = Duration::from_millis(500);

/// One-line timer state: phase, elapsed, category and note.
fn status_line(tracker: &Tracker) -> String {
    let timer = &tracker.state().timer;
    let phase = timer.phase();
    let color = color_for_running(timer.is_running());

    let detail = match phase {
        TimerPhase::Running { since } => format!(
            "{} since {} | {}",
            ms_to_hms(tracker.elapsed()),
            fmt_local_time(&since),
            timer.category
        ),
        TimerPhase::Idle => format!("{} | next: {}", ms_to_hms(0), timer.category),
    };

    let note = if timer.note.is_empty() {
        String::new()
    } else {
        format!(" ({})", timer.note)
    };

    format!("{color}● {:<7}{RESET} {detail}{note}", phase.as_str())
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { watch } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;

        println!("{}", status_line(&tracker));
        println!(
            "Today: {}",
            colorize_optional(&ms_to_hm(tracker.today_total()))
        );

        if !*watch {
            return Ok(());
        }

        if !tracker.state().timer.is_running() {
            info("Timer is not running, nothing to watch.");
            return Ok(());
        }

        let mut out = io::stdout();
        loop {
            thread::sleep(WATCH_INTERVAL);
            tracker.refresh()?;

            if !tracker.state().timer.is_running() {
                println!();
                info("Timer stopped.");
                break;
            }

            print!("\r{}\x1b[K", status_line(&tracker));
            out.flush().ok();
        }
    }

    Ok(())
}
