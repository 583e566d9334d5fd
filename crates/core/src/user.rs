//! User records

use crate::fields::Fields;
use serde::{Deserialize, Serialize};

/// A user as supplied by the host on login
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Caller-supplied identifier; doubles as the stored id
    pub identifier: String,
    /// Free-form metadata
    #[serde(default)]
    pub metadata: Fields,
}

impl NewUser {
    /// User with empty metadata
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            metadata: Fields::new(),
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Fields) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A persisted user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stored id (equal to `identifier`)
    pub id: String,
    /// Natural key
    pub identifier: String,
    /// Metadata captured on first creation
    pub metadata: Fields,
    /// ISO-8601 creation time
    pub created_at: String,
}
