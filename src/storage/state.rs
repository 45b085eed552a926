//! Budget state repository
//!
//! Serializes the whole budget to JSON under the single canonical key.
//! A missing, unreadable or unparseable snapshot loads as `None`; callers fall
//! back to the bootstrap budget instead of failing.

use tracing::{debug, warn};

use crate::error::BudgetError;
use crate::models::BudgetState;

use super::kv::KeyValueStore;

/// The one key the budget is stored under
pub const STORAGE_KEY: &str = "budgetState_v1";

/// Loads and saves the budget through a key-value backend
#[derive(Debug)]
pub struct StateRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StateRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying backend
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the last saved budget, if there is a usable one
    pub fn load(&self) -> Option<BudgetState> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = STORAGE_KEY, "no saved budget");
                return None;
            }
            Err(e) => {
                warn!(key = STORAGE_KEY, error = %e, "failed to read saved budget");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => {
                debug!(key = STORAGE_KEY, "loaded saved budget");
                Some(state)
            }
            Err(e) => {
                warn!(key = STORAGE_KEY, error = %e, "saved budget is corrupt, ignoring it");
                None
            }
        }
    }

    /// Overwrite the saved budget with `state`
    pub fn save(&self, state: &BudgetState) -> Result<(), BudgetError> {
        let raw = serde_json::to_string(state)?;
        self.store.set(STORAGE_KEY, &raw)?;
        debug!(key = STORAGE_KEY, bytes = raw.len(), "saved budget");
        Ok(())
    }
}
