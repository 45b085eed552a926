//! Discretionary spending CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::models::{Money, Mutation};
use crate::services::BudgetService;
use crate::storage::KeyValueStore;

/// Extra (discretionary spending) subcommands
#[derive(Subcommand)]
pub enum ExtraCommands {
    /// List discretionary expenses in the order they were recorded
    List,

    /// Record a discretionary expense
    Add {
        /// What the money went on
        description: String,

        /// Amount spent
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Date of the expense (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

/// Handle an extra command
pub fn handle_extra_command<S: KeyValueStore>(
    service: &mut BudgetService<S>,
    settings: &Settings,
    cmd: ExtraCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExtraCommands::List => {
            let extras = &service.state().extras;
            if extras.is_empty() {
                println!("No discretionary spending recorded.");
                return Ok(());
            }

            for extra in extras {
                println!(
                    "{}  {:<28} {:>14}",
                    extra.date,
                    extra.description,
                    extra.amount.format_with_symbol(symbol)
                );
            }
            println!("{}", "-".repeat(55));

            let total: Money = extras.iter().map(|e| e.amount).sum();
            println!("{:<40} {:>14}", "Total", total.format_with_symbol(symbol));
        }
        ExtraCommands::Add {
            description,
            amount,
            date,
        } => {
            service.update(&Mutation::AppendExtra {
                description,
                amount,
                date,
            })?;

            if let Some(extra) = service.state().extras.last() {
                println!(
                    "Recorded {} for '{}' on {}",
                    extra.amount.format_with_symbol(symbol),
                    extra.description,
                    extra.date
                );
            }
            println!(
                "Remaining: {}",
                service
                    .summary()
                    .discretionary_remaining
                    .format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
