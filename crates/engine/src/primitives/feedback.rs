//! Feedback store
//!
//! Feedback is stored under `THREAD#<threadId>::STEP#<forId>`, so upserting
//! twice for the same (thread, step) pair overwrites rather than
//! duplicating.

use crate::database::Database;
use chatstore_core::Feedback;
use std::sync::Arc;
use tracing::info;

/// Feedback store facade
#[derive(Clone)]
pub struct FeedbackStore {
    db: Arc<Database>,
}

impl FeedbackStore {
    /// Create a new feedback store facade
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert or overwrite feedback. Any `id` on the input is replaced by
    /// the derived key, which is returned.
    pub fn upsert(&self, mut feedback: Feedback) -> String {
        let key = feedback.derived_key();
        feedback.id = Some(key.clone());
        info!(feedback_id = %key, value = feedback.value, "upserting feedback");
        self.db.feedback.put(key.clone(), feedback);
        key
    }

    /// Copy of a stored feedback record
    pub fn get(&self, feedback_id: &str) -> Option<Feedback> {
        self.db.feedback.get(feedback_id)
    }

    /// Remove feedback by id. Returns true if it existed.
    pub fn delete(&self, feedback_id: &str) -> bool {
        let existed = self.db.feedback.remove(feedback_id).is_some();
        info!(feedback_id, existed, "delete feedback");
        existed
    }
}
