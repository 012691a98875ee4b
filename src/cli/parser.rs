use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn biometric punch logs into daily attendance summaries",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process a punch log and write the daily summary
    Process {
        /// Punch log: `<code> <first> <last> <unix_ts> <device...>` per line
        input: String,

        #[arg(long = "json", value_name = "FILE", help = "Write the summary as JSON")]
        json: Option<String>,

        #[arg(long = "csv", value_name = "FILE", help = "Write the summary as CSV")]
        csv: Option<String>,

        #[arg(long = "xlsx", value_name = "FILE", help = "Write the summary as XLSX")]
        xlsx: Option<String>,

        #[arg(
            long = "errors",
            value_name = "FILE",
            help = "Write skipped lines with their reason"
        )]
        errors: Option<String>,

        #[arg(long = "no-stats", help = "Do not print processing statistics")]
        no_stats: bool,

        #[arg(long, short = 'f', help = "Overwrite existing output files")]
        force: bool,
    },

    /// Search a JSON summary by employee code and/or date
    Search {
        /// JSON summary written by `process --json`
        file: String,

        #[arg(long = "emp", value_name = "CODE", help = "Exact employee code")]
        emp: Option<String>,

        #[arg(long = "date", value_name = "YYYY-MM-DD", help = "Attendance date")]
        date: Option<String>,
    },

    /// Show a Unix timestamp in UTC and in the configured local offset
    Convert {
        /// Unix epoch seconds
        timestamp: String,
    },

    /// Manage the configuration file (view, create or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

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

        #[arg(long, short = 'f', help = "Overwrite an existing file with --init")]
        force: bool,
    },
}
