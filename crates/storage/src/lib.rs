//! Storage layer for chatstore
//!
//! One [`Collection`] per entity type. Each collection is a concurrent
//! string-keyed map that also remembers the order keys were first
//! inserted, so full scans come back in creation order.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;

pub use collection::Collection;
