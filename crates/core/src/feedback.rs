//! Feedback records
//!
//! Feedback is keyed by the (thread, step) pair it annotates, so a second
//! upsert for the same pair replaces the first.

use crate::de::null_as_default;
use serde::{Deserialize, Serialize};

/// A rating attached to a step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Derived key; assigned on upsert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Thread the rated step belongs to
    #[serde(default, deserialize_with = "null_as_default")]
    pub thread_id: String,
    /// Id of the rated step
    pub for_id: String,
    /// Caller-defined score
    pub value: i64,
    /// Optional free-text comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Feedback {
    /// Feedback without a comment
    pub fn new(thread_id: impl Into<String>, for_id: impl Into<String>, value: i64) -> Self {
        Self {
            id: None,
            thread_id: thread_id.into(),
            for_id: for_id.into(),
            value,
            comment: None,
        }
    }

    /// Attach a comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// `THREAD#<threadId>::STEP#<forId>`
    pub fn key_for(thread_id: &str, for_id: &str) -> String {
        format!("THREAD#{}::STEP#{}", thread_id, for_id)
    }

    /// The key this record is stored under
    pub fn derived_key(&self) -> String {
        Self::key_for(&self.thread_id, &self.for_id)
    }
}
