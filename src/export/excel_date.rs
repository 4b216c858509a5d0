// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Interpret a local `YYYY-MM-DD HH:MM[:SS]` cell as an Excel serial date,
/// with the number format to display it.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|dt| naive_datetime_to_excel_serial(&dt))
        .map(|serial| ("yyyy-mm-dd hh:mm", serial))
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_time(NaiveTime::MIN);
    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}
