//! Command handlers, one module per entity type.

pub mod config;
pub mod element;
pub mod feedback;
pub mod step;
pub mod thread;
pub mod user;
