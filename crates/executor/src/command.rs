//! Command enum: one variant per data-layer operation.
//!
//! Commands are serde-tagged so they can arrive as JSON:
//!
//! ```text
//! {"ThreadList": {"pagination": {"first": 10}, "filter": {"userId": "u1"}}}
//! {"StepUpdate": {"step": {"id": "s1", "threadId": "t1", "output": "done"}}}
//! {"Info": null}
//! ```

use chatstore_core::{Element, Feedback, NewUser, Pagination, Step, ThreadFilter, ThreadUpdate};
use chatstore_engine::StoreConfig;
use serde::{Deserialize, Serialize};

/// A single data-layer operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all_fields = "camelCase")]
pub enum Command {
    // =========================================================================
    // Users
    // =========================================================================
    /// Look up a user by identifier.
    UserGet { identifier: String },
    /// Create a user, or return the existing one.
    UserCreate { user: NewUser },

    // =========================================================================
    // Threads
    // =========================================================================
    /// Create-or-update a thread.
    ThreadUpdate {
        thread_id: String,
        #[serde(default)]
        update: ThreadUpdate,
    },
    /// Fetch a thread with its steps and elements.
    ThreadGet { thread_id: String },
    /// Owner of a thread.
    ThreadAuthor { thread_id: String },
    /// Delete a thread.
    ThreadDelete { thread_id: String },
    /// Filter, sort and paginate threads.
    ThreadList {
        #[serde(default)]
        pagination: Option<Pagination>,
        #[serde(default)]
        filter: Option<ThreadFilter>,
    },

    // =========================================================================
    // Steps
    // =========================================================================
    /// Create a step unless the id exists.
    StepCreate { step: Step },
    /// Shallow-merge into an existing step.
    StepUpdate { step: Step },
    /// Delete a step.
    StepDelete { step_id: String },

    // =========================================================================
    // Elements
    // =========================================================================
    /// Insert or replace an element.
    ElementCreate { element: Element },
    /// Fetch an element.
    ElementGet { thread_id: String, element_id: String },
    /// Delete an element.
    ElementDelete { element_id: String },

    // =========================================================================
    // Feedback
    // =========================================================================
    /// Insert or overwrite feedback for a (thread, step) pair.
    FeedbackUpsert { feedback: Feedback },
    /// Delete feedback by id.
    FeedbackDelete { feedback_id: String },

    // =========================================================================
    // Database
    // =========================================================================
    /// Debug URL for a thread (always empty).
    DebugUrl { thread_id: String },
    /// Entry counts per collection.
    Info,
    /// Current configuration.
    ConfigGet,
    /// Replace the configuration.
    ConfigSet { config: StoreConfig },
}

impl Command {
    /// Variant name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::UserGet { .. } => "UserGet",
            Command::UserCreate { .. } => "UserCreate",
            Command::ThreadUpdate { .. } => "ThreadUpdate",
            Command::ThreadGet { .. } => "ThreadGet",
            Command::ThreadAuthor { .. } => "ThreadAuthor",
            Command::ThreadDelete { .. } => "ThreadDelete",
            Command::ThreadList { .. } => "ThreadList",
            Command::StepCreate { .. } => "StepCreate",
            Command::StepUpdate { .. } => "StepUpdate",
            Command::StepDelete { .. } => "StepDelete",
            Command::ElementCreate { .. } => "ElementCreate",
            Command::ElementGet { .. } => "ElementGet",
            Command::ElementDelete { .. } => "ElementDelete",
            Command::FeedbackUpsert { .. } => "FeedbackUpsert",
            Command::FeedbackDelete { .. } => "FeedbackDelete",
            Command::DebugUrl { .. } => "DebugUrl",
            Command::Info => "Info",
            Command::ConfigGet => "ConfigGet",
            Command::ConfigSet { .. } => "ConfigSet",
        }
    }
}
