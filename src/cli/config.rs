//! Configuration CLI commands
//!
//! Shows resolved paths and updates `config.json`.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::{paths::BudgetPaths, settings::Settings};
use crate::error::{BudgetError, BudgetResult};

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,

    /// Set the currency symbol used when displaying amounts
    SetCurrency {
        /// Symbol (e.g., "$", "€")
        symbol: String,
    },

    /// Set where CSV exports are written
    SetExportDir {
        /// Directory path
        path: PathBuf,
    },
}

/// Handle a config command; `None` shows the configuration
pub fn handle_config_command(
    paths: &BudgetPaths,
    settings: &mut Settings,
    budget_file: &Path,
    cmd: Option<ConfigCommands>,
) -> BudgetResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            println!("Budget Dashboard Configuration");
            println!("==============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Budget file:      {}", budget_file.display());
            println!("Export directory: {}", settings.export_dir(paths).display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Schema version:  {}", settings.schema_version);
        }
        ConfigCommands::SetCurrency { symbol } => {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(BudgetError::Validation(
                    "Currency symbol cannot be empty".into(),
                ));
            }
            settings.currency_symbol = symbol.to_string();
            settings.save(paths)?;
            println!("Currency symbol set to '{}'", settings.currency_symbol);
        }
        ConfigCommands::SetExportDir { path } => {
            settings.export_dir = Some(path);
            settings.save(paths)?;
            println!("Export directory set to {}", settings.export_dir(paths).display());
        }
    }

    Ok(())
}
