//! Budget service
//!
//! Owns the current budget and its persistence. Every accepted mutation is
//! written through in full before it becomes the current state, so the
//! in-memory budget never runs ahead of what is stored.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::BudgetResult;
use crate::models::{BudgetState, Mutation};
use crate::reports::BudgetSummary;
use crate::storage::{KeyValueStore, StateRepository};

/// The state store: current budget plus the repository it is saved to
pub struct BudgetService<S: KeyValueStore> {
    repository: StateRepository<S>,
    state: BudgetState,
}

impl<S: KeyValueStore> BudgetService<S> {
    /// Load the saved budget, falling back to the bootstrap budget when
    /// nothing usable has been saved
    pub fn initialize(store: S) -> Self {
        let repository = StateRepository::new(store);
        let state = repository.load().unwrap_or_else(|| {
            info!("starting from the bootstrap budget");
            BudgetState::bootstrap()
        });

        Self { repository, state }
    }

    /// The current budget
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Totals derived from the current budget
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::generate(&self.state)
    }

    pub fn repository(&self) -> &StateRepository<S> {
        &self.repository
    }

    /// Apply a mutation dated today and persist the result
    pub fn update(&mut self, mutation: &Mutation) -> BudgetResult<&BudgetState> {
        self.update_on(mutation, Local::now().date_naive())
    }

    /// Apply a mutation and persist the result
    ///
    /// On any error (rejected input, unknown card, failed write) the current
    /// budget is left exactly as it was.
    pub fn update_on(&mut self, mutation: &Mutation, today: NaiveDate) -> BudgetResult<&BudgetState> {
        let next = self.state.apply(mutation, today).map_err(|e| {
            warn!(mutation = mutation.kind(), error = %e, "mutation rejected");
            e
        })?;

        self.repository.save(&next)?;
        self.state = next;
        debug!(mutation = mutation.kind(), "mutation applied");

        Ok(&self.state)
    }
}
