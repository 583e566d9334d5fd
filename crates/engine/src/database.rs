//! The in-memory database
//!
//! `Database` owns one [`Collection`] per entity type and the runtime
//! configuration. It holds no other state; the entity stores in
//! [`crate::primitives`] are stateless facades over an `Arc<Database>`.
//!
//! Each collection locks independently. No operation holds a lock on one
//! collection while reading another, so listing threads or joining a
//! thread with its steps never serializes unrelated writers.

use crate::config::StoreConfig;
use chatstore_core::{Element, Feedback, Step, Thread, User};
use chatstore_storage::Collection;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Entry counts per collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    /// Stored users
    pub users: usize,
    /// Stored threads
    pub threads: usize,
    /// Stored steps
    pub steps: usize,
    /// Stored elements
    pub elements: usize,
    /// Stored feedback records
    pub feedback: usize,
}

/// Five entity collections plus configuration
pub struct Database {
    pub(crate) users: Collection<User>,
    pub(crate) threads: Collection<Thread>,
    pub(crate) steps: Collection<Step>,
    pub(crate) elements: Collection<Element>,
    pub(crate) feedback: Collection<Feedback>,
    config: RwLock<StoreConfig>,
}

impl Database {
    /// Empty database with default configuration
    pub fn new() -> Arc<Self> {
        Self::with_config(StoreConfig::default())
    }

    /// Empty database with the given configuration
    pub fn with_config(config: StoreConfig) -> Arc<Self> {
        info!(
            thread_order = ?config.thread_order,
            log_payloads = config.log_payloads,
            "initialising in-memory database"
        );
        Arc::new(Self {
            users: Collection::new("users"),
            threads: Collection::new("threads"),
            steps: Collection::new("steps"),
            elements: Collection::new("elements"),
            feedback: Collection::new("feedback"),
            config: RwLock::new(config),
        })
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> StoreConfig {
        self.config.read().clone()
    }

    /// Modify the configuration in place
    pub fn update_config<F>(&self, f: F)
    where
        F: FnOnce(&mut StoreConfig),
    {
        let mut cfg = self.config.write();
        f(&mut cfg);
        info!(config = ?*cfg, "configuration updated");
    }

    /// True if full record payloads should be logged
    pub(crate) fn log_payloads(&self) -> bool {
        self.config.read().log_payloads
    }

    /// Entry counts per collection
    pub fn info(&self) -> DatabaseInfo {
        DatabaseInfo {
            users: self.users.len(),
            threads: self.threads.len(),
            steps: self.steps.len(),
            elements: self.elements.len(),
            feedback: self.feedback.len(),
        }
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("info", &self.info())
            .field("config", &*self.config.read())
            .finish()
    }
}
