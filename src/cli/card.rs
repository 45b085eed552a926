//! Credit card CLI commands
//!
//! Cards are fixed by the budget; only their balances can change.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::models::Mutation;
use crate::services::BudgetService;
use crate::storage::KeyValueStore;

/// Credit card subcommands
#[derive(Subcommand)]
pub enum CardCommands {
    /// List credit cards with balances and due dates
    List,

    /// Set the balance of an existing card
    Set {
        /// Card name (e.g., "Chase")
        name: String,

        /// New balance
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}

/// Handle a credit card command
pub fn handle_card_command<S: KeyValueStore>(
    service: &mut BudgetService<S>,
    settings: &Settings,
    cmd: CardCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CardCommands::List => {
            let cards = &service.state().credit_cards;
            if cards.is_empty() {
                println!("No credit cards.");
                return Ok(());
            }

            println!("{:<22} {:>14}  {}", "Card", "Balance", "Due");
            println!("{}", "-".repeat(50));
            for (name, card) in cards {
                println!(
                    "{:<22} {:>14}  {}",
                    name,
                    card.balance.format_with_symbol(symbol),
                    card.due_date
                );
            }
        }
        CardCommands::Set { name, amount } => {
            let state = service.update(&Mutation::SetCardBalance {
                name: name.clone(),
                amount,
            })?;

            if let Some(card) = state.credit_cards.get(&name) {
                println!(
                    "Set '{}' balance to {} (due {})",
                    name,
                    card.balance.format_with_symbol(symbol),
                    card.due_date
                );
            }
        }
    }

    Ok(())
}
