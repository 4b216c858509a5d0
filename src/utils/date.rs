//! Calendar helpers: local day boundaries and `--period` expressions.

use crate::errors::{AppError, AppResult};
use crate::utils::time::local_to_utc;
use chrono::{
    DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

/// Inclusive calendar-day bounds; `None` leaves that side open.
pub type DayBounds = (Option<NaiveDate>, Option<NaiveDate>);

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Local calendar day a timestamp falls on.
pub fn local_day(ts: &DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// First instant of `date` in the local zone.
pub fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    first_instant(date, local_to_utc)
}

/// First instant of `date` under `resolve` (wall clock → UTC, `None` for
/// times the zone skips).
fn first_instant(
    date: NaiveDate,
    resolve: impl Fn(&NaiveDateTime) -> Option<DateTime<Utc>>,
) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    resolve(&midnight)
        // some zones jump over midnight on DST days
        .or_else(|| resolve(&(midnight + Duration::hours(1))))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// Monday..Sunday of the week containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = day - Duration::days(day.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}

pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

/// Parse a period expression relative to `today`.
///
/// Supports:
/// - `all`, `today`, `week`, `month`
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `YYYY:YYYY`, `YYYY-MM:YYYY-MM`, `YYYY-MM-DD:YYYY-MM-DD`
pub fn parse_period(expr: &str, today: NaiveDate) -> AppResult<DayBounds> {
    let p = expr.trim();

    match p.to_ascii_lowercase().as_str() {
        "all" => return Ok((None, None)),
        "today" => return Ok((Some(today), Some(today))),
        "week" => {
            let (from, to) = week_bounds(today);
            return Ok((Some(from), Some(to)));
        }
        "month" => {
            let (from, to) = month_bounds(today.year(), today.month())
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            return Ok((Some(from), Some(to)));
        }
        _ => {}
    }

    let (from, to) = if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());
        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{p} (start and end must have the same format)"
            )));
        }
        (span_of(start)?.0, span_of(end)?.1)
    } else {
        span_of(p)?
    };

    if from > to {
        return Err(AppError::InvalidPeriod(format!("{p} (start is after end)")));
    }

    Ok((Some(from), Some(to)))
}

/// Whole span covered by a year, month or day literal.
fn span_of(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(s.to_string());

    match s.len() {
        // YYYY
        4 => {
            let y: i32 = s.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            month_bounds(first.year(), first.month()).ok_or_else(invalid)
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
