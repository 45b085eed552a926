//! Service layer for the budget dashboard
//!
//! The service layer sits on top of the storage layer: it owns the current
//! budget, applies mutations to it and writes every accepted change through.

pub mod budget;

pub use budget::BudgetService;
