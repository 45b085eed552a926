//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget service.

pub mod budget;
pub mod card;
pub mod config;
pub mod cost;
pub mod export;
pub mod extra;

pub use budget::{
    handle_checking_command, handle_income_command, handle_show_command, CheckingCommands,
    IncomeCommands,
};
pub use card::{handle_card_command, CardCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use cost::{handle_cost_command, CostCommands, CostKind};
pub use export::{handle_export_command, ExportCommands};
pub use extra::{handle_extra_command, ExtraCommands};
