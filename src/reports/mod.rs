//! Reports module for the budget dashboard
//!
//! Derived views over the budget state.

pub mod summary;

pub use summary::BudgetSummary;
