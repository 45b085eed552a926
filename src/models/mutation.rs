//! Budget mutations
//!
//! Every edit to the budget is a pure function from the current state to a
//! new one. Rejected edits return an error and leave the caller's state
//! untouched, so the caller can keep its inputs and retry.

use chrono::NaiveDate;

use super::money::{Money, MAX_AMOUNT};
use super::state::{BudgetState, Extra};
use crate::error::{BudgetError, BudgetResult};

/// One user edit, with amounts as raw numeric input
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetIncome(f64),
    SetCheckingBalance(f64),
    SetCardBalance { name: String, amount: f64 },
    AddOrUpdateRecurring { label: String, amount: f64 },
    RemoveRecurring(String),
    AddOrUpdatePending { label: String, amount: f64 },
    RemovePending(String),
    /// `date` falls back to the day the mutation is applied
    AppendExtra {
        description: String,
        amount: f64,
        date: Option<NaiveDate>,
    },
}

impl Mutation {
    /// Short name used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetIncome(_) => "set_income",
            Self::SetCheckingBalance(_) => "set_checking_balance",
            Self::SetCardBalance { .. } => "set_card_balance",
            Self::AddOrUpdateRecurring { .. } => "add_or_update_recurring",
            Self::RemoveRecurring(_) => "remove_recurring",
            Self::AddOrUpdatePending { .. } => "add_or_update_pending",
            Self::RemovePending(_) => "remove_pending",
            Self::AppendExtra { .. } => "append_extra",
        }
    }
}

/// Reject empty (or whitespace-only) labels, returning the trimmed label
fn require_label(field: &str, value: &str) -> BudgetResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Reject non-finite or out-of-range amounts and, unless allowed, negative ones
fn require_amount(field: &str, value: f64, allow_negative: bool) -> BudgetResult<Money> {
    let amount = Money::from_decimal(value).ok_or_else(|| {
        BudgetError::Validation(format!(
            "{} must be a finite number no larger than {}, got {}",
            field, MAX_AMOUNT, value
        ))
    })?;

    if amount.is_negative() && !allow_negative {
        return Err(BudgetError::Validation(format!(
            "{} cannot be negative, got {}",
            field, amount
        )));
    }

    Ok(amount)
}

impl BudgetState {
    /// Apply a mutation, resolving a missing extra date to `today`
    pub fn apply(&self, mutation: &Mutation, today: NaiveDate) -> BudgetResult<BudgetState> {
        match mutation {
            Mutation::SetIncome(amount) => self.set_income(*amount),
            Mutation::SetCheckingBalance(amount) => self.set_checking_balance(*amount),
            Mutation::SetCardBalance { name, amount } => self.set_card_balance(name, *amount),
            Mutation::AddOrUpdateRecurring { label, amount } => {
                self.add_or_update_recurring(label, *amount)
            }
            Mutation::RemoveRecurring(label) => Ok(self.remove_recurring(label)),
            Mutation::AddOrUpdatePending { label, amount } => {
                self.add_or_update_pending(label, *amount)
            }
            Mutation::RemovePending(label) => Ok(self.remove_pending(label)),
            Mutation::AppendExtra {
                description,
                amount,
                date,
            } => self.append_extra(description, *amount, date.unwrap_or(today)),
        }
    }

    pub fn set_income(&self, amount: f64) -> BudgetResult<BudgetState> {
        let income = require_amount("Income", amount, false)?;
        Ok(BudgetState {
            income,
            ..self.clone()
        })
    }

    /// The checking balance may go negative (overdraft)
    pub fn set_checking_balance(&self, amount: f64) -> BudgetResult<BudgetState> {
        let checking_balance = require_amount("Checking balance", amount, true)?;
        Ok(BudgetState {
            checking_balance,
            ..self.clone()
        })
    }

    /// Replace a card's balance, keeping its due date
    ///
    /// Unknown cards are a lookup failure; no card is ever created here.
    pub fn set_card_balance(&self, name: &str, amount: f64) -> BudgetResult<BudgetState> {
        if !self.credit_cards.contains_key(name) {
            return Err(BudgetError::card_not_found(name));
        }
        let balance = require_amount("Card balance", amount, false)?;

        let mut next = self.clone();
        if let Some(card) = next.credit_cards.get_mut(name) {
            card.balance = balance;
        }
        Ok(next)
    }

    /// Insert or overwrite a recurring cost
    pub fn add_or_update_recurring(&self, label: &str, amount: f64) -> BudgetResult<BudgetState> {
        let label = require_label("Recurring label", label)?;
        let amount = require_amount("Recurring amount", amount, false)?;

        let mut next = self.clone();
        next.recurring.insert(label, amount);
        Ok(next)
    }

    /// Remove a recurring cost; absent labels are ignored
    pub fn remove_recurring(&self, label: &str) -> BudgetState {
        let mut next = self.clone();
        next.recurring.remove(label.trim());
        next
    }

    /// Insert or overwrite a pending cost
    pub fn add_or_update_pending(&self, label: &str, amount: f64) -> BudgetResult<BudgetState> {
        let label = require_label("Pending label", label)?;
        let amount = require_amount("Pending amount", amount, false)?;

        let mut next = self.clone();
        next.pending.insert(label, amount);
        Ok(next)
    }

    /// Remove a pending cost; absent labels are ignored
    pub fn remove_pending(&self, label: &str) -> BudgetState {
        let mut next = self.clone();
        next.pending.remove(label.trim());
        next
    }

    /// Append a discretionary expense to the end of the list
    pub fn append_extra(
        &self,
        description: &str,
        amount: f64,
        date: NaiveDate,
    ) -> BudgetResult<BudgetState> {
        let description = require_label("Description", description)?;
        let amount = require_amount("Amount", amount, false)?;

        let mut next = self.clone();
        next.extras.push(Extra::new(date, description, amount));
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BudgetSummary;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_upsert_overwrites_instead_of_duplicating() {
        let state = BudgetState::empty()
            .add_or_update_recurring("X", 10.0)
            .unwrap()
            .add_or_update_recurring("X", 25.0)
            .unwrap();

        assert_eq!(state.recurring.len(), 1);
        assert_eq!(state.recurring["X"], Money::from_cents(2500));
    }

    #[test]
    fn test_rejects_empty_label_and_nan() {
        let state = BudgetState::bootstrap();

        let err = state.add_or_update_recurring("", 10.0).unwrap_err();
        assert!(err.is_validation());

        let err = state.add_or_update_recurring("   ", 10.0).unwrap_err();
        assert!(err.is_validation());

        let err = state.add_or_update_recurring("X", f64::NAN).unwrap_err();
        assert!(err.is_validation());

        let err = state.add_or_update_pending("X", f64::INFINITY).unwrap_err();
        assert!(err.is_validation());

        assert_eq!(state, BudgetState::bootstrap());
    }

    #[test]
    fn test_rejects_amounts_beyond_range() {
        let state = BudgetState::empty();

        let err = state.add_or_update_recurring("A", 1e300).unwrap_err();
        assert!(err.is_validation());
        assert!(state.add_or_update_pending("A", 5e16).unwrap_err().is_validation());
        assert!(state.set_income(MAX_AMOUNT * 2.0).is_err());
        assert!(state.set_checking_balance(-MAX_AMOUNT * 2.0).is_err());
        assert!(BudgetState::bootstrap()
            .set_card_balance("Chase", 1e300)
            .unwrap_err()
            .is_validation());
        assert!(state.append_extra("Yacht", 1e20, date(2025, 1, 5)).is_err());
    }

    #[test]
    fn test_largest_amounts_summarize_without_overflow() {
        let state = BudgetState::empty()
            .add_or_update_recurring("A", MAX_AMOUNT)
            .unwrap()
            .add_or_update_recurring("B", MAX_AMOUNT)
            .unwrap()
            .append_extra("C", MAX_AMOUNT, date(2025, 1, 5))
            .unwrap();

        let summary = BudgetSummary::generate(&state);
        assert_eq!(summary.total_recurring, Money::from_cents(2_000_000_000_000_000));
        assert_eq!(
            summary.discretionary_remaining,
            Money::from_cents(-3_000_000_000_000_000)
        );
    }

    #[test]
    fn test_rejects_negative_amounts() {
        let state = BudgetState::bootstrap();
        assert!(state.add_or_update_recurring("X", -1.0).is_err());
        assert!(state.add_or_update_pending("X", -1.0).is_err());
        assert!(state.set_income(-5.0).is_err());
        assert!(state.append_extra("Refund", -2.0, date(2025, 1, 5)).is_err());
    }

    #[test]
    fn test_checking_balance_may_be_negative() {
        let state = BudgetState::bootstrap().set_checking_balance(-42.5).unwrap();
        assert_eq!(state.checking_balance, Money::from_cents(-4250));
    }

    #[test]
    fn test_labels_are_trimmed() {
        let state = BudgetState::empty()
            .add_or_update_pending("  Taxes ", 10.0)
            .unwrap();
        assert!(state.pending.contains_key("Taxes"));

        let state = state.remove_pending(" Taxes");
        assert!(state.pending.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let state = BudgetState::bootstrap();
        let once = state.remove_recurring("Slack");
        let twice = once.remove_recurring("Slack");

        assert_eq!(once, twice);
        assert_eq!(once.recurring.len(), 10);
        assert!(!once.recurring.contains_key("Slack"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let state = BudgetState::bootstrap();
        assert_eq!(state.remove_recurring("Nope"), state);
        assert_eq!(state.remove_pending("Nope"), state);
    }

    #[test]
    fn test_set_card_balance_preserves_due_date() {
        let state = BudgetState::bootstrap().set_card_balance("Chase", 50.0).unwrap();
        let chase = state.credit_cards["Chase"];

        assert_eq!(chase.balance, Money::from_cents(5000));
        assert_eq!(chase.due_date, date(2025, 8, 24));
    }

    #[test]
    fn test_set_card_balance_unknown_card() {
        let state = BudgetState::bootstrap();
        let err = state.set_card_balance("Unknown", 50.0).unwrap_err();

        assert!(err.is_not_found());
        assert!(!state.credit_cards.contains_key("Unknown"));
        assert_eq!(state.credit_cards.len(), 2);
    }

    #[test]
    fn test_append_extra() {
        let state = BudgetState::empty()
            .append_extra("Coffee", 4.50, date(2025, 1, 5))
            .unwrap();

        assert_eq!(
            state.extras,
            vec![Extra::new(date(2025, 1, 5), "Coffee", Money::from_cents(450))]
        );
    }

    #[test]
    fn test_append_extra_keeps_order_and_duplicates() {
        let state = BudgetState::empty()
            .append_extra("Lunch", 12.0, date(2025, 1, 6))
            .unwrap()
            .append_extra("Coffee", 4.5, date(2025, 1, 5))
            .unwrap()
            .append_extra("Coffee", 4.5, date(2025, 1, 5))
            .unwrap();

        let descriptions: Vec<_> = state.extras.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Lunch", "Coffee", "Coffee"]);
    }

    #[test]
    fn test_apply_defaults_extra_date_to_today() {
        let today = date(2025, 3, 14);
        let mutation = Mutation::AppendExtra {
            description: "Pie".into(),
            amount: 3.14,
            date: None,
        };

        let state = BudgetState::empty().apply(&mutation, today).unwrap();
        assert_eq!(state.extras[0].date, today);
        assert_eq!(state.extras[0].amount, Money::from_cents(314));
    }

    #[test]
    fn test_apply_dispatches_each_mutation() {
        let today = date(2025, 1, 1);
        let state = BudgetState::bootstrap();

        let state = state.apply(&Mutation::SetIncome(3000.0), today).unwrap();
        assert_eq!(state.income, Money::from_cents(300_000));

        let state = state
            .apply(&Mutation::RemovePending("Taxes".into()), today)
            .unwrap();
        assert!(!state.pending.contains_key("Taxes"));

        let err = state
            .apply(
                &Mutation::SetCardBalance {
                    name: "Amex".into(),
                    amount: 1.0,
                },
                today,
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
