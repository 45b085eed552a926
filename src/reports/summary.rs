//! Budget Summary Report
//!
//! Folds a budget state into its headline figures. Pending costs are totalled
//! for visibility but do not reduce the discretionary remaining amount: they
//! have not been incurred yet.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetState, Money};

/// Derived totals for a budget state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Monthly income, copied from the state
    pub income: Money,
    /// Sum of all recurring costs
    pub total_recurring: Money,
    /// Sum of all pending costs
    pub total_pending: Money,
    /// Sum of all discretionary extras
    pub total_extras: Money,
    /// income - total_recurring - total_extras
    pub discretionary_remaining: Money,
}

impl BudgetSummary {
    /// Compute the summary for a state
    pub fn generate(state: &BudgetState) -> Self {
        let total_recurring: Money = state.recurring.values().sum();
        let total_pending: Money = state.pending.values().sum();
        let total_extras: Money = state.extras.iter().map(|e| e.amount).sum();

        Self {
            income: state.income,
            total_recurring,
            total_pending,
            total_extras,
            discretionary_remaining: state.income - total_recurring - total_extras,
        }
    }

    /// Check whether recurring costs and extras exceed income
    pub fn is_overspent(&self) -> bool {
        self.discretionary_remaining.is_negative()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        let rows = [
            ("Income", self.income),
            ("Recurring", self.total_recurring),
            ("Pending", self.total_pending),
            ("Discretionary Spent", self.total_extras),
        ];
        for (label, amount) in rows {
            output.push_str(&format!(
                "{:<24} {:>14}\n",
                label,
                amount.format_with_symbol(currency_symbol)
            ));
        }

        output.push_str(&"-".repeat(40));
        output.push('\n');

        let remaining = self.discretionary_remaining.format_with_symbol(currency_symbol);
        if self.is_overspent() {
            output.push_str(&format!("{:<24} {:>14} *\n", "Remaining", remaining));
            output.push_str("\n* = Overspent\n");
        } else {
            output.push_str(&format!("{:<24} {:>14}\n", "Remaining", remaining));
        }

        output
    }
}
