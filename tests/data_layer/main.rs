//! Data layer integration tests
//!
//! Drives the store end-to-end through the public surface:
//! - `records`: users, steps, elements and feedback
//! - `threads`: implicit creation, joined fetch, deletion
//! - `listing`: filter / sort / cursor / page pipeline
//! - `wire`: JSON command boundary
//! - `properties`: pagination laws under proptest
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test data_layer
//! ```

mod listing;
mod properties;
mod threads;
mod wire;

use chatstore::InMemoryDataLayer;

/// Route tracing output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

/// Fresh data layer with logging enabled.
pub fn layer() -> InMemoryDataLayer {
    init_tracing();
    InMemoryDataLayer::new()
}
