//! Thread records
//!
//! A thread has no explicit create call. The first [`ThreadUpdate`] applied
//! to an unseen id synthesizes it with defaults via [`Thread::create`];
//! later updates go through [`Thread::apply`], which only touches the
//! fields the update carries.

use crate::element::Element;
use crate::fields::Fields;
use crate::step::Step;
use serde::{Deserialize, Serialize};

/// A conversation thread
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    /// Caller-supplied id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Owning user id; empty means no owner was ever given
    #[serde(default)]
    pub user_id: String,
    /// Owner identifier captured when the thread was first written
    #[serde(default)]
    pub user_identifier: String,
    /// ISO-8601 creation time, fixed on first write
    #[serde(default)]
    pub created_at: String,
    /// Free-form metadata
    #[serde(default)]
    pub metadata: Fields,
    /// Ordered tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Thread {
    /// Synthesize a thread from its first update.
    pub fn create(id: impl Into<String>, created_at: String, update: ThreadUpdate) -> Self {
        let user_id = update.user_id.unwrap_or_default();
        Thread {
            id: id.into(),
            name: update.name.unwrap_or_default(),
            user_identifier: user_id.clone(),
            user_id,
            created_at,
            metadata: update.metadata.unwrap_or_default(),
            tags: update.tags.unwrap_or_default(),
        }
    }

    /// Replace each field the update carries. `user_identifier` and
    /// `created_at` are never changed after creation.
    pub fn apply(&mut self, update: ThreadUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(user_id) = update.user_id {
            self.user_id = user_id;
        }
        if let Some(metadata) = update.metadata {
            self.metadata = metadata;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
    }

    /// Case-insensitive substring match against the name or any tag.
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Partial update for a thread; `None` leaves a field alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadUpdate {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Replacement metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Fields>,
    /// Replacement tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ThreadUpdate {
    /// Empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the owner
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Replace metadata
    pub fn metadata(mut self, metadata: Fields) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Replace tags
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// A thread together with its steps and elements, as returned by a single
/// thread fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadView {
    /// The thread record
    #[serde(flatten)]
    pub thread: Thread,
    /// Steps whose `threadId` matches, in step insertion order
    pub steps: Vec<Step>,
    /// Elements whose `threadId` matches, in element insertion order
    pub elements: Vec<Element>,
}
