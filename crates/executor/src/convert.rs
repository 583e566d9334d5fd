//! Error conversion from store errors.
//!
//! Maps [`StoreError`] onto the executor's [`Error`] while keeping the
//! entity reference and reason text.

use crate::Error;
use chatstore_core::{StoreError, StoreResult};

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidInput { entity, reason } => Error::InvalidInput {
                reason: format!("{}: {}", entity, reason),
            },
            StoreError::NotFound { entity_ref } => Error::NotFound {
                entity: entity_ref.to_string(),
            },
            StoreError::Config { message } => Error::Config { reason: message },
            StoreError::Serialization { message } => Error::Serialization { reason: message },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Convert a store result into an executor result.
pub fn convert_result<T>(result: StoreResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
