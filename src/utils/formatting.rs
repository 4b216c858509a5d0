//! Formatting utilities used for CLI and export outputs.

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Milliseconds → `HH:MM`. Seconds are truncated, hours are not capped at 24.
pub fn ms_to_hm(ms: i64) -> String {
    let s = ms.max(0) / MS_PER_SECOND;
    format!("{:02}:{:02}", s / 3600, (s % 3600) / 60)
}

/// Milliseconds → `HH:MM:SS` (live timer display).
pub fn ms_to_hms(ms: i64) -> String {
    let s = ms.max(0) / MS_PER_SECOND;
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Whole minutes, half a minute rounds up.
pub fn ms_to_minutes(ms: i64) -> i64 {
    (ms + MS_PER_MINUTE / 2).div_euclid(MS_PER_MINUTE)
}

/// Shorten `s` to at most `max` characters, ending with an ellipsis when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
