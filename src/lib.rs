//! # chatstore
//!
//! An in-memory data layer for chat applications: users, threads, steps,
//! elements and feedback, with filtered, cursor-paginated thread listing.
//!
//! # Quick Start
//!
//! ```
//! use chatstore::prelude::*;
//!
//! # async fn demo() -> chatstore::Result<()> {
//! let layer = InMemoryDataLayer::new();
//!
//! layer.update_thread("t1", ThreadUpdate::new().name("Support").user_id("u1")).await?;
//! layer.create_step(Step::new("s1", "t1").with("output", "Hi!")).await?;
//!
//! let page = layer
//!     .list_threads(Some(Pagination::first(20)), Some(ThreadFilter::new().user_id("u1")))
//!     .await?;
//! assert_eq!(page.total, 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Layers
//!
//! - [`DataLayer`]: async host-facing contract, implemented by
//!   [`InMemoryDataLayer`]
//! - [`Executor`]: synchronous [`Command`] / [`Output`] interface, also
//!   usable over JSON
//! - [`Database`]: the collections and configuration

#![warn(missing_docs)]

pub mod types;

pub use chatstore_api::{DataLayer, InMemoryDataLayer};
pub use chatstore_engine::Database;
pub use chatstore_executor::{Command, Error, Executor, Output, Result};
pub use types::*;

/// Everything needed to drive the data layer.
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{DataLayer, Database, Error, InMemoryDataLayer, Result};
}
