//! Element records (attachments)

use crate::de::null_as_default;
use crate::error::{StoreError, StoreResult};
use crate::fields::Fields;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A file, image or other attachment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Caller-supplied id
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Thread the element belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    /// Caller-defined fields (type, name, mime, url, ...)
    #[serde(flatten)]
    pub fields: Fields,
}

impl Element {
    /// Element attached to a thread
    pub fn new(id: impl Into<String>, thread_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            thread_id: Some(thread_id.into()),
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

    /// True if the element belongs to `thread_id`
    pub fn belongs_to(&self, thread_id: &str) -> bool {
        self.thread_id.as_deref() == Some(thread_id)
    }

    /// `id` must be non-empty.
    pub fn validate(&self) -> StoreResult<()> {
        if self.id.is_empty() {
            return Err(StoreError::invalid_input("element", "element id is required"));
        }
        Ok(())
    }
}
