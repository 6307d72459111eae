use crate::config::Source;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCheckin
/// Admin console for construction-crew check-in records
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Crew check-in admin: sign in, browse, filter and export geotagged check-ins",
    long_about = None
)]
pub struct Cli {
    /// Override the local cache path (useful for tests or a custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Where records are read from (overrides `source` in the config file)
    #[arg(global = true, long = "source", value_enum)]
    pub source: Option<Source>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the local cache
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration (secrets masked)")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Sign in as administrator
    Login {
        #[arg(long, short = 'u', help = "Admin username (default: from config)")]
        username: Option<String>,

        #[arg(long, short = 'p', help = "Password (read from stdin when omitted)")]
        password: Option<String>,
    },

    /// Sign out and delete the local session
    Logout,

    /// Show whether a session is active and when it expires
    Status,

    /// List check-in records, newest first
    List {
        #[arg(long, short = 'n', help = "Case-insensitive part of the employee name")]
        name: Option<String>,

        #[arg(long, short = 'd', help = "Check-in date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Print records as JSON")]
        json: bool,
    },

    /// Show one check-in record in detail
    Show {
        /// Record id
        id: String,
    },

    /// Per-employee check-in statistics
    Stats {
        #[arg(long, help = "Print statistics as JSON")]
        json: bool,
    },

    /// Export the (filtered) check-in records to a spreadsheet
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: construction-checkins-<today>.<ext>)"
        )]
        file: Option<String>,

        #[arg(long, short = 'n', help = "Case-insensitive part of the employee name")]
        name: Option<String>,

        #[arg(long, short = 'd', help = "Check-in date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Copy every record from the hosted table into the local cache
    Sync,

    /// Load records from a JSON file into the local cache
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Maintain the local cache (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
