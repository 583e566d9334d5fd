//! Public types for the chatstore data layer.
//!
//! Re-exports the record, query and configuration types from the member
//! crates under one path.

// ============================================================================
// Records
// ============================================================================

pub use chatstore_core::{Element, Feedback, Fields, NewUser, Step, Thread, ThreadView, User};

// Thread mutation input
pub use chatstore_core::ThreadUpdate;

// Creation timestamps
pub use chatstore_core::Timestamp;

// ============================================================================
// Listing
// ============================================================================

pub use chatstore_core::{FeedbackPresence, Page, PageInfo, Pagination, ThreadFilter};

// ============================================================================
// Configuration and introspection
// ============================================================================

pub use chatstore_engine::{DatabaseInfo, StoreConfig, ThreadOrder};

// ============================================================================
// Errors
// ============================================================================

pub use chatstore_core::{EntityRef, StoreError, StoreResult};
