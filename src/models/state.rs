//! Budget state model
//!
//! The single persisted record: income, checking balance, recurring and
//! pending costs keyed by label, credit cards keyed by name, and the
//! append-only list of discretionary extras.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A credit card's outstanding balance and its next due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub balance: Money,

    /// Stored as `due`; `dueDate` is accepted when reading
    #[serde(rename = "due", alias = "dueDate")]
    pub due_date: NaiveDate,
}

impl CreditCard {
    pub fn new(balance: Money, due_date: NaiveDate) -> Self {
        Self { balance, due_date }
    }
}

/// A dated, one-off discretionary expenditure
///
/// Extras have no identity beyond their position in the list; two entries
/// with the same date and description are both kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
}

impl Extra {
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }
}

/// The whole budget, persisted in full after every accepted mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetState {
    /// Monthly gross income
    pub income: Money,

    /// Current bank balance (informational only)
    #[serde(default)]
    pub checking_balance: Money,

    /// Monthly costs by label
    #[serde(default)]
    pub recurring: BTreeMap<String, Money>,

    /// Anticipated one-time costs by label
    #[serde(default)]
    pub pending: BTreeMap<String, Money>,

    /// Credit cards by name
    #[serde(default)]
    pub credit_cards: BTreeMap<String, CreditCard>,

    /// Discretionary spending in insertion order
    #[serde(default)]
    pub extras: Vec<Extra>,
}

/// Seed recurring costs used on first run
const BOOTSTRAP_RECURRING: [(&str, i64); 11] = [
    ("Health Insurance", 12375),
    ("Slack", 1826),
    ("Apple Digital", 4298),
    ("HackChinese", 1200),
    ("Squarespace", 3600),
    ("LinkedIn", 5999),
    ("ChatGPT", 20000),
    ("Gas", 10000),
    ("Lattes", 42000),
    ("UCI Patent Debt", 50000),
    ("Spotify", 1299),
];

/// Seed pending costs used on first run
const BOOTSTRAP_PENDING: [(&str, i64); 3] = [
    ("Taxes", 16749),
    ("Tax Accountant", 37500),
    ("Guitar Completion", 100000),
];

/// Seed credit cards used on first run: (name, balance in cents, due y/m/d)
const BOOTSTRAP_CARDS: [(&str, i64, (i32, u32, u32)); 2] = [
    ("Chase", 1200, (2025, 8, 24)),
    ("SchoolsFirstFCU", 0, (2025, 8, 27)),
];

impl BudgetState {
    /// An empty budget with zero income and no entries
    pub fn empty() -> Self {
        Self {
            income: Money::zero(),
            checking_balance: Money::zero(),
            recurring: BTreeMap::new(),
            pending: BTreeMap::new(),
            credit_cards: BTreeMap::new(),
            extras: Vec::new(),
        }
    }

    /// The fixed seed budget used when nothing has been persisted yet
    pub fn bootstrap() -> Self {
        let recurring = BOOTSTRAP_RECURRING
            .iter()
            .map(|(label, cents)| (label.to_string(), Money::from_cents(*cents)))
            .collect();

        let pending = BOOTSTRAP_PENDING
            .iter()
            .map(|(label, cents)| (label.to_string(), Money::from_cents(*cents)))
            .collect();

        let credit_cards = BOOTSTRAP_CARDS
            .iter()
            .filter_map(|(name, cents, (y, m, d))| {
                NaiveDate::from_ymd_opt(*y, *m, *d).map(|due| {
                    (
                        name.to_string(),
                        CreditCard::new(Money::from_cents(*cents), due),
                    )
                })
            })
            .collect();

        Self {
            income: Money::from_dollars_cents(2200, 0),
            checking_balance: Money::zero(),
            recurring,
            pending,
            credit_cards,
            extras: Vec::new(),
        }
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::bootstrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_contents() {
        let state = BudgetState::bootstrap();

        assert_eq!(state.income, Money::from_cents(220_000));
        assert!(state.checking_balance.is_zero());
        assert_eq!(state.recurring.len(), 11);
        assert_eq!(state.pending.len(), 3);
        assert_eq!(state.credit_cards.len(), 2);
        assert!(state.extras.is_empty());

        assert_eq!(state.recurring["Slack"], Money::from_cents(1826));
        assert_eq!(state.pending["Guitar Completion"], Money::from_cents(100_000));

        let chase = state.credit_cards["Chase"];
        assert_eq!(chase.balance, Money::from_cents(1200));
        assert_eq!(chase.due_date, NaiveDate::from_ymd_opt(2025, 8, 24).unwrap());
    }

    #[test]
    fn test_json_shape() {
        let state = BudgetState::bootstrap();
        let value = serde_json::to_value(&state).unwrap();

        assert_eq!(value["income"], serde_json::json!(2200.0));
        assert_eq!(value["checkingBalance"], serde_json::json!(0.0));
        assert_eq!(value["recurring"]["Health Insurance"], serde_json::json!(123.75));
        assert_eq!(value["creditCards"]["Chase"]["due"], "2025-08-24");
        assert_eq!(value["creditCards"]["Chase"]["balance"], serde_json::json!(12.0));
        assert_eq!(value["extras"], serde_json::json!([]));
    }

    #[test]
    fn test_reads_browser_style_document() {
        let raw = r#"{
            "income": 2200,
            "checkingBalance": 310.5,
            "recurring": { "Gas": 100 },
            "pending": {},
            "creditCards": { "Chase": { "balance": 12, "dueDate": "2025-08-24" } },
            "extras": [ { "date": "2025-01-05", "description": "Coffee", "amount": 4.5 } ]
        }"#;

        let state: BudgetState = serde_json::from_str(raw).unwrap();
        assert_eq!(state.checking_balance, Money::from_cents(31_050));
        assert_eq!(state.recurring["Gas"], Money::from_cents(10_000));
        assert_eq!(
            state.credit_cards["Chase"].due_date,
            NaiveDate::from_ymd_opt(2025, 8, 24).unwrap()
        );
        assert_eq!(state.extras[0].description, "Coffee");
        assert_eq!(state.extras[0].amount, Money::from_cents(450));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut state = BudgetState::bootstrap();
        state.extras.push(Extra::new(
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            "Coffee",
            Money::from_cents(450),
        ));
        state.extras.push(Extra::new(
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            "Coffee",
            Money::from_cents(450),
        ));

        let json = serde_json::to_string(&state).unwrap();
        let loaded: BudgetState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, state);
    }
}
