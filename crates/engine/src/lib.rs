//! In-memory engine for chatstore
//!
//! [`Database`] owns the five entity collections and the runtime
//! configuration. The entity stores in [`primitives`] are stateless facades
//! over an `Arc<Database>`; [`query`] holds the thread listing pipeline.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod database;
pub mod primitives;
pub mod query;

pub use config::{StoreConfig, ThreadOrder};
pub use database::{Database, DatabaseInfo};
pub use primitives::{ElementStore, FeedbackStore, StepStore, ThreadStore, UserStore};
