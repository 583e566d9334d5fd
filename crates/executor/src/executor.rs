//! Command dispatch.

use std::sync::Arc;

use chatstore_engine::Database;
use tracing::debug;

use crate::bridge::Primitives;
use crate::handlers::{config, element, feedback, step, thread, user};
use crate::{Command, Output, Result};

/// Executes [`Command`]s against a database.
///
/// Cheap to clone; clones share the same database.
#[derive(Clone)]
pub struct Executor {
    primitives: Arc<Primitives>,
}

impl Executor {
    /// Create an executor over `db`.
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            primitives: Arc::new(Primitives::new(db)),
        }
    }

    /// The underlying database.
    pub fn database(&self) -> &Arc<Database> {
        &self.primitives.db
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(command = cmd.name(), "executing");
        let p = &self.primitives;
        match cmd {
            Command::UserGet { identifier } => user::user_get(p, identifier),
            Command::UserCreate { user: new_user } => user::user_create(p, new_user),

            Command::ThreadUpdate { thread_id, update } => {
                thread::thread_update(p, thread_id, update)
            }
            Command::ThreadGet { thread_id } => thread::thread_get(p, thread_id),
            Command::ThreadAuthor { thread_id } => thread::thread_author(p, thread_id),
            Command::ThreadDelete { thread_id } => thread::thread_delete(p, thread_id),
            Command::ThreadList { pagination, filter } => {
                thread::thread_list(p, pagination, filter)
            }
            Command::DebugUrl { thread_id } => thread::debug_url(p, thread_id),

            Command::StepCreate { step: s } => step::step_create(p, s),
            Command::StepUpdate { step: s } => step::step_update(p, s),
            Command::StepDelete { step_id } => step::step_delete(p, step_id),

            Command::ElementCreate { element: e } => element::element_create(p, e),
            Command::ElementGet {
                thread_id,
                element_id,
            } => element::element_get(p, thread_id, element_id),
            Command::ElementDelete { element_id } => element::element_delete(p, element_id),

            Command::FeedbackUpsert { feedback: f } => feedback::feedback_upsert(p, f),
            Command::FeedbackDelete { feedback_id } => feedback::feedback_delete(p, feedback_id),

            Command::Info => config::info(p),
            Command::ConfigGet => config::config_get(p),
            Command::ConfigSet { config: cfg } => config::config_set(p, cfg),
        }
    }

    /// Decode a JSON command, execute it and encode the output as JSON.
    pub fn execute_json(&self, json: &str) -> Result<String> {
        let cmd: Command = serde_json::from_str(json)?;
        let output = self.execute(cmd)?;
        Ok(serde_json::to_string(&output)?)
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("db", &self.primitives.db)
            .finish()
    }
}
