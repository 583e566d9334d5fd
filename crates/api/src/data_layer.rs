//! The data-layer contract
//!
//! ## Error Handling
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Step without `id` or `threadId` | `InvalidInput` |
//! | Element without `id` | `InvalidInput` |
//! | Update of an unknown step | `NotFound` |
//!
//! Reads of unknown keys return `None`; deletes of unknown keys return
//! `false`. Neither is an error.

use async_trait::async_trait;
use chatstore_core::{
    Element, Feedback, NewUser, Page, Pagination, Step, Thread, ThreadFilter, ThreadUpdate,
    ThreadView, User,
};

use crate::Result;

/// Persistence operations a chat host calls.
///
/// ## Contract
///
/// - Threads are created implicitly by the first `update_thread`
/// - Re-creating an existing step is a no-op, never an overwrite
/// - Feedback is keyed by `(threadId, forId)`; a second upsert for the
///   same pair replaces the first
/// - Returned records are copies; mutating them does not touch the store
#[async_trait]
pub trait DataLayer: Send + Sync {
    // =========================================================================
    // Users
    // =========================================================================

    /// Look up a user by identifier.
    async fn get_user(&self, identifier: &str) -> Result<Option<User>>;

    /// Create a user, or return the stored one unchanged if the identifier
    /// is already known.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    // =========================================================================
    // Feedback
    // =========================================================================

    /// Insert or overwrite feedback. Returns the derived id
    /// `THREAD#<threadId>::STEP#<forId>`.
    async fn upsert_feedback(&self, feedback: Feedback) -> Result<String>;

    /// Delete feedback by id. Returns whether a record was present.
    async fn delete_feedback(&self, feedback_id: &str) -> Result<bool>;

    // =========================================================================
    // Elements
    // =========================================================================

    /// Insert or wholly replace an element.
    ///
    /// ## Errors
    ///
    /// - `InvalidInput`: `id` is empty
    async fn create_element(&self, element: Element) -> Result<()>;

    /// Fetch an element by id. `thread_id` is accepted for the host's
    /// calling convention and not checked.
    async fn get_element(&self, thread_id: &str, element_id: &str) -> Result<Option<Element>>;

    /// Delete an element. Returns whether a record was present.
    async fn delete_element(&self, element_id: &str) -> Result<bool>;

    // =========================================================================
    // Steps
    // =========================================================================

    /// Create a step. Returns `false` if the id already existed, in which
    /// case nothing changes.
    ///
    /// ## Errors
    ///
    /// - `InvalidInput`: `id` or `threadId` is empty
    async fn create_step(&self, step: Step) -> Result<bool>;

    /// Shallow-merge `step` into the stored step with the same id.
    /// Returns the merged record.
    ///
    /// ## Errors
    ///
    /// - `InvalidInput`: `id` or `threadId` is empty
    /// - `NotFound`: no step with that id
    async fn update_step(&self, step: Step) -> Result<Step>;

    /// Delete a step. Returns whether a record was present.
    async fn delete_step(&self, step_id: &str) -> Result<bool>;

    // =========================================================================
    // Threads
    // =========================================================================

    /// Owner of a thread; `None` if the thread does not exist.
    async fn get_thread_author(&self, thread_id: &str) -> Result<Option<String>>;

    /// Delete a thread. Its steps, elements and feedback stay.
    async fn delete_thread(&self, thread_id: &str) -> Result<bool>;

    /// Create-or-update a thread. Returns the stored record.
    async fn update_thread(&self, thread_id: &str, update: ThreadUpdate) -> Result<Thread>;

    /// Filter, sort by creation time (oldest first) and paginate threads.
    async fn list_threads(
        &self,
        pagination: Option<Pagination>,
        filter: Option<ThreadFilter>,
    ) -> Result<Page<Thread>>;

    /// A thread with its steps and elements.
    async fn get_thread(&self, thread_id: &str) -> Result<Option<ThreadView>>;

    /// URL of an external debug view for a thread. Always empty here.
    async fn build_debug_url(&self, thread_id: &str) -> Result<String>;
}
