//! One handler per subcommand, plus the bits they share: opening the
//! tracker with the right clock and turning filter flags into an
//! [`EntryFilter`].

pub mod backup;
pub mod category;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod restore;
pub mod set;
pub mod settings;
pub mod start;
pub mod status;
pub mod stop;
pub mod summary;

use crate::cli::parser::{Cli, FilterArgs};
use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::models::summary::EntryFilter;
use crate::utils::clock::{Clock, FixedClock, SystemClock};
use crate::utils::date::{parse_date, parse_period};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_timestamp;
use chrono::NaiveDate;

/// `--now` pins the clock; otherwise the system time is used.
pub(crate) fn clock_for(cli: &Cli) -> AppResult<Box<dyn Clock>> {
    let clock: Box<dyn Clock> = match &cli.now {
        Some(ts) => Box::new(FixedClock(parse_timestamp(ts)?)),
        None => Box::new(SystemClock),
    };
    Ok(clock)
}

pub(crate) fn db_path(cfg: &Config) -> String {
    expand_tilde(&cfg.database).to_string_lossy().to_string()
}

pub(crate) fn open_tracker(cli: &Cli, cfg: &Config) -> AppResult<Tracker> {
    Tracker::open(&db_path(cfg), clock_for(cli)?)
}

/// Precedence: `--all`, then `--from/--to`, then `--period`, then the
/// configured default range.
pub(crate) fn resolve_filter(
    args: &FilterArgs,
    cfg: &Config,
    today: NaiveDate,
) -> AppResult<EntryFilter> {
    let (from, to) = if args.all {
        (None, None)
    } else if args.from.is_some() || args.to.is_some() {
        (
            args.from.as_deref().map(parse_date).transpose()?,
            args.to.as_deref().map(parse_date).transpose()?,
        )
    } else {
        let expr = args.period.as_deref().unwrap_or(&cfg.default_range);
        parse_period(expr, today)?
    };

    let category = args
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Ok(EntryFilter { from, to, category })
}
