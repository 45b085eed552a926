//! Budget CLI commands
//!
//! The overview plus the two scalar amounts: income and checking balance.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::models::{BudgetState, Mutation};
use crate::services::BudgetService;
use crate::storage::KeyValueStore;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Show the monthly income
    Show,

    /// Set the monthly income
    Set {
        /// Income amount (e.g., "5000" or "5000.00")
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}

/// Checking balance subcommands
#[derive(Subcommand)]
pub enum CheckingCommands {
    /// Show the checking account balance
    Show,

    /// Set the checking account balance (may be negative)
    Set {
        /// Balance (e.g., "1200.50" or "-40")
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}

/// Print the summary followed by every collection in the budget
pub fn handle_show_command<S: KeyValueStore>(
    service: &BudgetService<S>,
    settings: &Settings,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let state = service.state();

    print!("{}", service.summary().format_terminal(symbol));
    println!();
    println!(
        "Checking balance: {}",
        state.checking_balance.format_with_symbol(symbol)
    );
    println!();
    print!("{}", format_state_lists(state, symbol));

    Ok(())
}

/// Handle an income command
pub fn handle_income_command<S: KeyValueStore>(
    service: &mut BudgetService<S>,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Show => {
            println!("Income: {}", service.state().income.format_with_symbol(symbol));
        }
        IncomeCommands::Set { amount } => {
            let state = service.update(&Mutation::SetIncome(amount))?;
            println!("Set income to {}", state.income.format_with_symbol(symbol));

            let summary = service.summary();
            println!(
                "Remaining: {}",
                summary.discretionary_remaining.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

/// Handle a checking balance command
pub fn handle_checking_command<S: KeyValueStore>(
    service: &mut BudgetService<S>,
    settings: &Settings,
    cmd: CheckingCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CheckingCommands::Show => {
            println!(
                "Checking balance: {}",
                service.state().checking_balance.format_with_symbol(symbol)
            );
        }
        CheckingCommands::Set { amount } => {
            let state = service.update(&Mutation::SetCheckingBalance(amount))?;
            println!(
                "Set checking balance to {}",
                state.checking_balance.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

/// Format every collection as indented sections
pub fn format_state_lists(state: &BudgetState, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Credit Cards\n");
    if state.credit_cards.is_empty() {
        output.push_str("  (none)\n");
    }
    for (name, card) in &state.credit_cards {
        output.push_str(&format!(
            "  {:<22} {:>14}  due {}\n",
            name,
            card.balance.format_with_symbol(symbol),
            card.due_date
        ));
    }

    for (title, costs) in [("Recurring Costs", &state.recurring), ("Pending Costs", &state.pending)] {
        output.push('\n');
        output.push_str(title);
        output.push('\n');
        if costs.is_empty() {
            output.push_str("  (none)\n");
        }
        for (label, amount) in costs {
            output.push_str(&format!(
                "  {:<22} {:>14}\n",
                label,
                amount.format_with_symbol(symbol)
            ));
        }
    }

    output.push_str("\nDiscretionary Spending\n");
    if state.extras.is_empty() {
        output.push_str("  (none)\n");
    }
    for extra in &state.extras {
        output.push_str(&format!(
            "  {}  {:<22} {:>14}\n",
            extra.date,
            extra.description,
            extra.amount.format_with_symbol(symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_format_state_lists_bootstrap() {
        let output = format_state_lists(&BudgetState::bootstrap(), "$");

        assert!(output.contains("Chase"));
        assert!(output.contains("due 2025-08-24"));
        assert!(output.contains("Health Insurance"));
        assert!(output.contains("Pending Costs"));
        // Bootstrap has no extras
        assert!(output.contains("Discretionary Spending\n  (none)"));
    }

    #[test]
    fn test_income_set_updates_service() {
        let mut service = BudgetService::initialize(MemoryStore::new());
        let settings = Settings::default();

        handle_income_command(&mut service, &settings, IncomeCommands::Set { amount: 3000.0 })
            .unwrap();

        assert_eq!(service.state().income.cents(), 300000);
    }

    #[test]
    fn test_income_set_rejects_negative() {
        let mut service = BudgetService::initialize(MemoryStore::new());
        let settings = Settings::default();

        let err =
            handle_income_command(&mut service, &settings, IncomeCommands::Set { amount: -1.0 })
                .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.state().income.cents(), 220000);
    }

    #[test]
    fn test_checking_set_allows_negative() {
        let mut service = BudgetService::initialize(MemoryStore::new());
        let settings = Settings::default();

        handle_checking_command(
            &mut service,
            &settings,
            CheckingCommands::Set { amount: -40.25 },
        )
        .unwrap();

        assert_eq!(service.state().checking_balance.cents(), -4025);
    }
}
