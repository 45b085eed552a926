//! Budget Dashboard - personal monthly budget tracking
//!
//! This library holds one monthly budget: income, a checking balance,
//! recurring and pending costs, credit card balances and discretionary
//! spending. It derives the discretionary remaining amount and exports the
//! whole budget as a flat CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The budget state, money and mutations
//! - `storage`: Key-value persistence with atomic file writes
//! - `services`: The state store that applies and persists mutations
//! - `reports`: Derived totals
//! - `export`: CSV and snapshot export
//! - `cli` / `tui`: User interfaces
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_dashboard::config::paths::BudgetPaths;
//! use budget_dashboard::models::Mutation;
//! use budget_dashboard::services::BudgetService;
//! use budget_dashboard::storage::open_file_store;
//!
//! let paths = BudgetPaths::new()?;
//! let mut service = BudgetService::initialize(open_file_store(&paths)?);
//! service.update(&Mutation::SetIncome(2500.0))?;
//! println!("{}", service.summary().discretionary_remaining);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::BudgetError;
