use crate::cli::commands::{open_tracker, resolve_filter};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::local_day;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = &cli.command
    {
        let tracker = open_tracker(cli, cfg)?;
        let today = local_day(&tracker.now());
        let filter = resolve_filter(filter, cfg, today)?;
        let path = ExportLogic::resolve_path(file.as_deref(), *format, today);

        let count = ExportLogic::export(&tracker.state().entries, &filter, *format, &path, *force)?;

        ttlog_quiet(
            tracker.store().conn(),
            "export",
            &path.to_string_lossy(),
            &format!("{count} entries exported as {}", format.as_str()),
        );
    }

    Ok(())
}
