use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// Writes a configuration file with every field at its default value.
/// In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    println!("⚙️  Initializing rBreakMonitor…");
    println!("📄 Config file : {}", path.display());

    if cli.test {
        info("Test mode: configuration file not written.");
        return Ok(());
    }

    if path.exists() {
        info("Configuration file already present, left untouched.");
        return Ok(());
    }

    Config::default().save_to(&path)?;
    success("rBreakMonitor initialization completed!");
    Ok(())
}
