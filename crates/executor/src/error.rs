//! Executor error type.

use thiserror::Error;

/// Result alias for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`Executor::execute`](crate::Executor::execute).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required field was missing or empty.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong
        reason: String,
    },

    /// The referenced entity does not exist.
    #[error("not found: {entity}")]
    NotFound {
        /// Entity reference, e.g. `step:s1`
        entity: String,
    },

    /// Configuration failure.
    #[error("config error: {reason}")]
    Config {
        /// Underlying failure
        reason: String,
    },

    /// A command or output could not be encoded/decoded.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying failure
        reason: String,
    },

    /// The executor produced an output that does not match the command.
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong
        reason: String,
    },
}
