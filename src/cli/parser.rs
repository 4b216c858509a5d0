use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for arbeitszeit
/// Personal working-time tracker: one timer, categorized entries, SQLite store
#[derive(Parser)]
#[command(
    name = "arbeitszeit",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time tracker: start/stop a timer, categorize sessions, summarize and export them",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin the current time (RFC 3339 or local YYYY-MM-DDTHH:MM)
    #[arg(global = true, long = "now", hide = true, value_name = "TIMESTAMP")]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Range and category filter shared by `list`, `summary` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", conflicts_with_all = ["period", "all"])]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", conflicts_with_all = ["period", "all"])]
    pub to: Option<String>,

    /// Period: today, week, month, all, YYYY, YYYY-MM, YYYY-MM-DD or START:END
    #[arg(long, short, conflicts_with = "all")]
    pub period: Option<String>,

    /// Only entries of this category
    #[arg(long, short)]
    pub category: Option<String>,

    /// No date restriction
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// Append a new category
    Add { name: String },

    /// Show all categories
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        self == Toggle::On
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start the timer
    Start {
        #[arg(long, short, help = "Category (defaults to the last used one)")]
        category: Option<String>,

        #[arg(long, short, help = "Free-text note")]
        note: Option<String>,
    },

    /// Stop the timer and record the session
    Stop,

    /// Show the timer state, elapsed time and today's total
    Status {
        #[arg(long, short, help = "Refresh every 500 ms while the timer runs")]
        watch: bool,
    },

    /// Set category/note for the next session, or of the running one
    Set {
        #[arg(long, short)]
        category: Option<String>,

        #[arg(long, short)]
        note: Option<String>,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// List entries with totals
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show today's total, per-category totals and the grand total
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Edit an entry (id or unique id prefix)
    Edit {
        id: String,

        #[arg(long, help = "New start (YYYY-MM-DDTHH:MM)")]
        start: Option<String>,

        #[arg(long, help = "New end (YYYY-MM-DDTHH:MM)")]
        end: Option<String>,

        #[arg(long, short)]
        category: Option<String>,

        #[arg(long, short)]
        note: Option<String>,
    },

    /// Delete an entry (id or unique id prefix)
    Del {
        id: String,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Write a full backup (entries, categories, timer, settings)
    Backup {
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace all data with the content of a backup file
    Restore {
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Show or change settings
    Settings {
        #[arg(long, value_enum, help = "Round stopped sessions to 5 minutes")]
        rounding5: Option<Toggle>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Database maintenance
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
