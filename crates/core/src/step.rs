//! Step records
//!
//! A step is an open-ended mapping: `id` and `threadId` are required,
//! everything else the host sends rides along in [`Step::fields`].

use crate::de::null_as_default;
use crate::error::{StoreError, StoreResult};
use crate::fields::Fields;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of conversation activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Caller-supplied id
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Owning thread id
    #[serde(default, deserialize_with = "null_as_default")]
    pub thread_id: String,
    /// Caller-defined fields (input, output, type, ...)
    #[serde(flatten)]
    pub fields: Fields,
}

impl Step {
    /// Step with no extra fields
    pub fn new(id: impl Into<String>, thread_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            thread_id: thread_id.into(),
            fields: Fields::new(),
        }
    }

    /// Add a caller-defined field
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.set(key, value);
        self
    }

    /// Look up a caller-defined field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Both `id` and `threadId` must be non-empty.
    pub fn validate(&self) -> StoreResult<()> {
        if self.id.is_empty() || self.thread_id.is_empty() {
            return Err(StoreError::invalid_input(
                "step",
                "both 'id' and 'threadId' must be provided",
            ));
        }
        Ok(())
    }

    /// Shallow merge of `patch` into this step: `threadId` and every
    /// field present in the patch overwrite, the rest is kept.
    pub fn merge(&mut self, patch: Step) {
        self.thread_id = patch.thread_id;
        self.fields.merge_from(patch.fields);
    }
}
