//! Step store
//!
//! Steps are created once and then patched:
//! - `create` on an existing id is a logged no-op, never an overwrite.
//! - `update` shallow-merges the payload into the stored step and fails
//!   if the step does not exist.

use crate::database::Database;
use chatstore_core::{EntityRef, Step, StoreError, StoreResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Step store facade
#[derive(Clone)]
pub struct StepStore {
    db: Arc<Database>,
}

impl StepStore {
    /// Create a new step store facade
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a step unless one with the same id exists.
    ///
    /// Returns `Ok(true)` if inserted, `Ok(false)` if the id was taken.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: `id` or `threadId` is empty
    pub fn create(&self, step: Step) -> StoreResult<bool> {
        step.validate()?;
        info!(step_id = %step.id, thread_id = %step.thread_id, "creating step");

        let step_id = step.id.clone();
        let inserted = self.db.steps.insert_if_absent(step_id.clone(), step);
        if !inserted {
            warn!(step_id = %step_id, "step already exists, skipping re-creation");
        }
        Ok(inserted)
    }

    /// Merge `patch` into the stored step with the same id. Returns the
    /// merged record.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: `id` or `threadId` is empty
    /// - `NotFound`: no step with this id
    pub fn update(&self, patch: Step) -> StoreResult<Step> {
        patch.validate()?;
        info!(step_id = %patch.id, thread_id = %patch.thread_id, "updating step");

        let step_id = patch.id.clone();
        let merged = self
            .db
            .steps
            .update(&step_id, |stored| {
                stored.merge(patch);
                stored.clone()
            })
            .ok_or_else(|| StoreError::not_found(EntityRef::step(step_id.as_str())))?;

        if self.db.log_payloads() {
            debug!(step_id = %merged.id, fields = %merged.fields, "merged step");
        }
        Ok(merged)
    }

    /// Copy of a stored step
    pub fn get(&self, step_id: &str) -> Option<Step> {
        self.db.steps.get(step_id)
    }

    /// Remove a step. Returns true if it existed.
    pub fn delete(&self, step_id: &str) -> bool {
        let existed = self.db.steps.remove(step_id).is_some();
        info!(step_id, existed, "delete step");
        existed
    }
}
