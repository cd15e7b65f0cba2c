//! rBreakMonitor library root.
//! Exposes the roster parser, the break classifier, the day-off edit, the
//! CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::io::IsTerminal;
use std::path::Path;
use ui::panels::RenderOptions;
use utils::path::expand_tilde;

/// Environment variable holding the `tracing` filter (e.g. `debug`).
pub const LOG_ENV: &str = "RBREAKMONITOR_LOG";

/// Install the stderr `tracing` subscriber. Quiet unless `RBREAKMONITOR_LOG`
/// asks for more.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    let opts = RenderOptions {
        use_colors: cfg.use_colors && std::io::stdout().is_terminal(),
        separator_char: cfg.separator_char.clone(),
    };

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg, &opts),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, &opts),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg, &opts),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // diagnostics go to stderr
    init_tracing();
    let cli = Cli::parse();

    // --config wins over the default location
    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&config_path)?;

    dispatch(&cli, &cfg, &config_path)
}
