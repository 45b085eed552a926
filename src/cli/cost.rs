//! Recurring and pending cost CLI commands
//!
//! Both collections are label-keyed amounts and share one command set.

use std::collections::BTreeMap;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::models::{Money, Mutation};
use crate::services::BudgetService;
use crate::storage::KeyValueStore;

/// Which cost collection a command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostKind {
    Recurring,
    Pending,
}

impl CostKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Recurring => "recurring cost",
            Self::Pending => "pending cost",
        }
    }

    fn upsert(&self, label: String, amount: f64) -> Mutation {
        match self {
            Self::Recurring => Mutation::AddOrUpdateRecurring { label, amount },
            Self::Pending => Mutation::AddOrUpdatePending { label, amount },
        }
    }

    fn remove(&self, label: String) -> Mutation {
        match self {
            Self::Recurring => Mutation::RemoveRecurring(label),
            Self::Pending => Mutation::RemovePending(label),
        }
    }
}

/// Cost subcommands
#[derive(Subcommand)]
pub enum CostCommands {
    /// List costs and their total
    List,

    /// Add a cost, or overwrite the amount of an existing label
    #[command(alias = "set")]
    Add {
        /// Cost label (e.g., "Spotify")
        label: String,

        /// Monthly amount
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Remove a cost by label
    #[command(alias = "rm")]
    Remove {
        /// Cost label
        label: String,
    },
}

fn costs_of<S: KeyValueStore>(service: &BudgetService<S>, kind: CostKind) -> &BTreeMap<String, Money> {
    match kind {
        CostKind::Recurring => &service.state().recurring,
        CostKind::Pending => &service.state().pending,
    }
}

/// Handle a recurring or pending cost command
pub fn handle_cost_command<S: KeyValueStore>(
    service: &mut BudgetService<S>,
    settings: &Settings,
    kind: CostKind,
    cmd: CostCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CostCommands::List => {
            let costs = costs_of(service, kind);
            if costs.is_empty() {
                println!("No {}s.", kind.name());
                return Ok(());
            }

            for (label, amount) in costs {
                println!("{:<28} {:>14}", label, amount.format_with_symbol(symbol));
            }
            println!("{}", "-".repeat(43));

            let total: Money = costs.values().sum();
            println!("{:<28} {:>14}", "Total", total.format_with_symbol(symbol));
        }
        CostCommands::Add { label, amount } => {
            let label = label.trim().to_string();
            let existed = costs_of(service, kind).contains_key(&label);

            service.update(&kind.upsert(label.clone(), amount))?;

            let stored = costs_of(service, kind)
                .get(&label)
                .copied()
                .unwrap_or_else(Money::zero);
            let verb = if existed { "Updated" } else { "Added" };
            println!(
                "{} {} '{}': {}",
                verb,
                kind.name(),
                label,
                stored.format_with_symbol(symbol)
            );
        }
        CostCommands::Remove { label } => {
            let label = label.trim().to_string();
            let existed = costs_of(service, kind).contains_key(&label);

            service.update(&kind.remove(label.clone()))?;

            if existed {
                println!("Removed {} '{}'", kind.name(), label);
            } else {
                println!("No {} named '{}'", kind.name(), label);
            }
        }
    }

    Ok(())
}
