use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rBreakMonitor
/// CLI application to monitor operator breaks from a roster CSV
#[derive(Parser)]
#[command(
    name = "rbreakmonitor",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple break monitor CLI: who is on break, who is next, who just came back",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,
    },

    /// Show the roster loaded from a file
    Show {
        /// Roster file (CSV with NOME, 1º DESCANSO, ALIMENTAÇÃO INI, 2º DESCANSO)
        file: String,

        #[arg(long = "date", help = "Reference date for the roster times (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Classify breaks once and print the three panels
    Status {
        /// Roster file (CSV with NOME, 1º DESCANSO, ALIMENTAÇÃO INI, 2º DESCANSO)
        file: String,

        #[arg(long = "at", help = "Evaluate at this time (HH:MM) instead of now")]
        at: Option<String>,

        #[arg(long = "date", help = "Reference date for the roster times (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(
            long = "off",
            value_name = "NAME@HH:MM",
            help = "Give NAME the day off from the break starting at HH:MM (repeatable)"
        )]
        off: Vec<String>,

        #[arg(long, value_enum, default_value = "text", help = "Output format")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Write the output to FILE instead of stdout")]
        output: Option<String>,

        #[arg(long, short = 'f', requires = "output", help = "Overwrite FILE if it already exists")]
        force: bool,
    },

    /// Live dashboard refreshed on every tick
    Watch {
        /// Roster file (CSV with NOME, 1º DESCANSO, ALIMENTAÇÃO INI, 2º DESCANSO)
        file: String,

        #[arg(
            long = "interval-ms",
            value_parser = clap::value_parser!(u64).range(1..),
            help = "Refresh interval in milliseconds (default from config)"
        )]
        interval_ms: Option<u64>,

        #[arg(long = "ticks", help = "Stop after this many refreshes")]
        ticks: Option<u64>,

        #[arg(
            long = "off",
            value_name = "NAME@HH:MM",
            help = "Give NAME the day off from the break starting at HH:MM (repeatable)"
        )]
        off: Vec<String>,

        #[arg(long = "no-clear", help = "Do not clear the screen between refreshes")]
        no_clear: bool,
    },
}
