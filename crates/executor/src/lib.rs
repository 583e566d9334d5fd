//! Command execution layer for chatstore
//!
//! Every data-layer operation is a [`Command`]; [`Executor::execute`]
//! dispatches it to a handler and returns an [`Output`]. Commands and
//! outputs are serde types, so [`Executor::execute_json`] exposes the same
//! surface over JSON using the host framework's camelCase record shapes.
//!
//! # Example
//!
//! ```
//! use chatstore_engine::Database;
//! use chatstore_executor::{Command, Executor, Output};
//!
//! let ex = Executor::new(Database::new());
//! let out = ex.execute(Command::ThreadAuthor { thread_id: "t1".into() }).unwrap();
//! assert_eq!(out, Output::MaybeText(None));
//! ```

#![warn(clippy::all)]

mod bridge;
mod command;
mod convert;
mod error;
mod executor;
mod handlers;
mod output;

pub use command::Command;
pub use convert::convert_result;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
