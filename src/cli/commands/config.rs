use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}, defaults are in use.",
                    path.display()
                ));
            } else {
                let missing = migrate::missing_fields(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `rbreakmonitor config --migrate` to add them.");
                }
            }
        }

        // ---- MIGRATE CONFIG ----
        if *run_migrate {
            if path.exists() {
                migrate::migrate_config(path)?;
            } else {
                warning(format!(
                    "No configuration file at {}, run `rbreakmonitor init` first.",
                    path.display()
                ));
            }
        }
    }

    Ok(())
}
