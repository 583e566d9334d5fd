//! Host-facing data layer
//!
//! A chat framework persists its conversation history through the
//! [`DataLayer`] trait: users, threads, steps, elements and feedback,
//! plus thread listing and the joined thread fetch. Every method is
//! async because hosts drive it from an async runtime; the in-memory
//! implementation never actually suspends.
//!
//! # Example
//!
//! ```
//! use chatstore_api::{DataLayer, InMemoryDataLayer};
//! use chatstore_core::ThreadUpdate;
//!
//! # async fn demo() -> chatstore_api::Result<()> {
//! let layer = InMemoryDataLayer::new();
//! layer.update_thread("t1", ThreadUpdate::new().user_id("alice")).await?;
//! assert_eq!(layer.get_thread_author("t1").await?.as_deref(), Some("alice"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod data_layer;
mod in_memory;

pub use chatstore_executor::{Error, Result};
pub use data_layer::DataLayer;
pub use in_memory::InMemoryDataLayer;
