use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::ms_to_hm;
use crate::utils::time::fmt_local;
use chrono::{DateTime, Utc};
use std::fs;

/// Print size and content statistics of the store.
pub fn print_db_info(
    db_path: &str,
    documents: i64,
    entries: &[TimeEntry],
    log_rows: i64,
) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!("{}• Documents:{} {}", CYAN, RESET, documents);
    println!("{}• Log rows:{} {}", CYAN, RESET, log_rows);

    //
    // 2) ENTRIES
    //
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        entries.len(),
        RESET
    );

    let first = entries.iter().map(|e| e.start).min();
    let last = entries.iter().map(|e| e.start).max();

    let fmt = |ts: Option<DateTime<Utc>>| {
        ts.map(|t| fmt_local(&t))
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    //
    // 3) TRACKED TIME
    //
    let total: i64 = entries.iter().map(|e| e.duration_ms).sum();
    println!("{}• Tracked time:{} {}", CYAN, RESET, ms_to_hm(total));

    println!();
    Ok(())
}
