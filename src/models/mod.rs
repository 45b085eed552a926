//! Core data models for the budget dashboard
//!
//! This module contains the budget record itself, the money type its amounts
//! are stored in, and the mutations that produce new versions of it.

pub mod money;
pub mod mutation;
pub mod state;

pub use money::Money;
pub use mutation::Mutation;
pub use state::{BudgetState, CreditCard, Extra};
