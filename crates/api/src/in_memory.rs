//! [`DataLayer`] over an [`Executor`]
//!
//! Each trait method builds one [`Command`], executes it and unwraps the
//! matching [`Output`] variant. A mismatched variant is an
//! [`Error::Internal`].

use std::sync::Arc;

use async_trait::async_trait;
use chatstore_core::{
    Element, Feedback, NewUser, Page, Pagination, Step, Thread, ThreadFilter, ThreadUpdate,
    ThreadView, User,
};
use chatstore_engine::{Database, StoreConfig};
use chatstore_executor::{Command, Error, Executor, Output};
use tracing::error;

use crate::{DataLayer, Result};

/// In-memory data layer
///
/// Clones share the same store.
#[derive(Clone, Debug)]
pub struct InMemoryDataLayer {
    executor: Executor,
}

impl InMemoryDataLayer {
    /// Empty store with default configuration.
    pub fn new() -> Self {
        Self::with_database(Database::new())
    }

    /// Empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_database(Database::with_config(config))
    }

    /// Data layer over an existing database.
    pub fn with_database(db: Arc<Database>) -> Self {
        Self {
            executor: Executor::new(db),
        }
    }

    /// The underlying database.
    pub fn database(&self) -> &Arc<Database> {
        self.executor.database()
    }
}

impl Default for InMemoryDataLayer {
    fn default() -> Self {
        Self::new()
    }
}

fn unexpected(op: &str, output: Output) -> Error {
    error!(command = op, output = output.name(), "unexpected output");
    Error::Internal {
        reason: format!("Unexpected output for {}: {}", op, output.name()),
    }
}

#[async_trait]
impl DataLayer for InMemoryDataLayer {
    async fn get_user(&self, identifier: &str) -> Result<Option<User>> {
        match self.executor.execute(Command::UserGet {
            identifier: identifier.to_string(),
        })? {
            Output::MaybeUser(user) => Ok(user),
            other => Err(unexpected("UserGet", other)),
        }
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        match self.executor.execute(Command::UserCreate { user })? {
            Output::User(user) => Ok(user),
            other => Err(unexpected("UserCreate", other)),
        }
    }

    async fn upsert_feedback(&self, feedback: Feedback) -> Result<String> {
        match self.executor.execute(Command::FeedbackUpsert { feedback })? {
            Output::Text(id) => Ok(id),
            other => Err(unexpected("FeedbackUpsert", other)),
        }
    }

    async fn delete_feedback(&self, feedback_id: &str) -> Result<bool> {
        match self.executor.execute(Command::FeedbackDelete {
            feedback_id: feedback_id.to_string(),
        })? {
            Output::Bool(existed) => Ok(existed),
            other => Err(unexpected("FeedbackDelete", other)),
        }
    }

    async fn create_element(&self, element: Element) -> Result<()> {
        match self.executor.execute(Command::ElementCreate { element })? {
            Output::Unit => Ok(()),
            other => Err(unexpected("ElementCreate", other)),
        }
    }

    async fn get_element(&self, thread_id: &str, element_id: &str) -> Result<Option<Element>> {
        match self.executor.execute(Command::ElementGet {
            thread_id: thread_id.to_string(),
            element_id: element_id.to_string(),
        })? {
            Output::MaybeElement(element) => Ok(element),
            other => Err(unexpected("ElementGet", other)),
        }
    }

    async fn delete_element(&self, element_id: &str) -> Result<bool> {
        match self.executor.execute(Command::ElementDelete {
            element_id: element_id.to_string(),
        })? {
            Output::Bool(existed) => Ok(existed),
            other => Err(unexpected("ElementDelete", other)),
        }
    }

    async fn create_step(&self, step: Step) -> Result<bool> {
        match self.executor.execute(Command::StepCreate { step })? {
            Output::Bool(inserted) => Ok(inserted),
            other => Err(unexpected("StepCreate", other)),
        }
    }

    async fn update_step(&self, step: Step) -> Result<Step> {
        match self.executor.execute(Command::StepUpdate { step })? {
            Output::Step(step) => Ok(step),
            other => Err(unexpected("StepUpdate", other)),
        }
    }

    async fn delete_step(&self, step_id: &str) -> Result<bool> {
        match self.executor.execute(Command::StepDelete {
            step_id: step_id.to_string(),
        })? {
            Output::Bool(existed) => Ok(existed),
            other => Err(unexpected("StepDelete", other)),
        }
    }

    async fn get_thread_author(&self, thread_id: &str) -> Result<Option<String>> {
        match self.executor.execute(Command::ThreadAuthor {
            thread_id: thread_id.to_string(),
        })? {
            Output::MaybeText(author) => Ok(author),
            other => Err(unexpected("ThreadAuthor", other)),
        }
    }

    async fn delete_thread(&self, thread_id: &str) -> Result<bool> {
        match self.executor.execute(Command::ThreadDelete {
            thread_id: thread_id.to_string(),
        })? {
            Output::Bool(existed) => Ok(existed),
            other => Err(unexpected("ThreadDelete", other)),
        }
    }

    async fn update_thread(&self, thread_id: &str, update: ThreadUpdate) -> Result<Thread> {
        match self.executor.execute(Command::ThreadUpdate {
            thread_id: thread_id.to_string(),
            update,
        })? {
            Output::Thread(thread) => Ok(thread),
            other => Err(unexpected("ThreadUpdate", other)),
        }
    }

    async fn list_threads(
        &self,
        pagination: Option<Pagination>,
        filter: Option<ThreadFilter>,
    ) -> Result<Page<Thread>> {
        match self
            .executor
            .execute(Command::ThreadList { pagination, filter })?
        {
            Output::ThreadPage(page) => Ok(page),
            other => Err(unexpected("ThreadList", other)),
        }
    }

    async fn get_thread(&self, thread_id: &str) -> Result<Option<ThreadView>> {
        match self.executor.execute(Command::ThreadGet {
            thread_id: thread_id.to_string(),
        })? {
            Output::MaybeThreadView(view) => Ok(view),
            other => Err(unexpected("ThreadGet", other)),
        }
    }

    async fn build_debug_url(&self, thread_id: &str) -> Result<String> {
        match self.executor.execute(Command::DebugUrl {
            thread_id: thread_id.to_string(),
        })? {
            Output::Text(url) => Ok(url),
            other => Err(unexpected("DebugUrl", other)),
        }
    }
}
