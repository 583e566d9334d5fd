//! Unified error type for the chatstore data layer
//!
//! Every fallible store operation returns [`StoreResult`].
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Missing or empty key field on create/update | `InvalidInput` |
//! | Update of a step that does not exist | `NotFound` |
//! | Unreadable or malformed configuration | `Config` |
//! | JSON encode/decode failure at a boundary | `Serialization` |
//!
//! Lookups and deletes of unknown keys are never errors; they return
//! `None` / `false`.

use std::fmt;
use thiserror::Error;

/// Result alias used across the workspace
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Identifies the stored entity an error refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// A user, keyed by identifier
    User {
        /// Caller-supplied identifier
        identifier: String,
    },
    /// A step within a thread
    Step {
        /// Step id
        id: String,
    },
    /// A feedback record
    Feedback {
        /// Derived feedback id
        id: String,
    },
}

impl EntityRef {
    /// Reference a user
    pub fn user(identifier: impl Into<String>) -> Self {
        EntityRef::User {
            identifier: identifier.into(),
        }
    }

    /// Reference a step
    pub fn step(id: impl Into<String>) -> Self {
        EntityRef::Step { id: id.into() }
    }

    /// Reference a feedback record
    pub fn feedback(id: impl Into<String>) -> Self {
        EntityRef::Feedback { id: id.into() }
    }

    /// Entity kind as a lowercase name
    pub fn kind(&self) -> &'static str {
        match self {
            EntityRef::User { .. } => "user",
            EntityRef::Step { .. } => "step",
            EntityRef::Feedback { .. } => "feedback",
        }
    }

    /// The key portion of the reference
    pub fn key(&self) -> &str {
        match self {
            EntityRef::User { identifier } => identifier,
            EntityRef::Step { id } | EntityRef::Feedback { id } => id,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.key())
    }
}

/// Errors raised by store operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was missing or empty
    #[error("invalid {entity}: {reason}")]
    InvalidInput {
        /// Entity kind ("step", "element", ...)
        entity: &'static str,
        /// What was wrong
        reason: String,
    },

    /// The referenced entity does not exist
    #[error("{entity_ref} does not exist")]
    NotFound {
        /// The missing entity
        entity_ref: EntityRef,
    },

    /// Configuration could not be read or parsed
    #[error("config error: {message}")]
    Config {
        /// Underlying failure
        message: String,
    },

    /// JSON encode/decode failure
    #[error("serialization error: {message}")]
    Serialization {
        /// Underlying failure
        message: String,
    },
}

impl StoreError {
    /// Validation failure on the given entity kind
    pub fn invalid_input(entity: &'static str, reason: impl Into<String>) -> Self {
        StoreError::InvalidInput {
            entity,
            reason: reason.into(),
        }
    }

    /// The referenced entity is missing
    pub fn not_found(entity_ref: EntityRef) -> Self {
        StoreError::NotFound { entity_ref }
    }

    /// Configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        StoreError::Config {
            message: message.into(),
        }
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        StoreError::Serialization {
            message: message.into(),
        }
    }

    /// True for `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// True for `InvalidInput`
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, StoreError::InvalidInput { .. })
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::serialization(err.to_string())
    }
}
