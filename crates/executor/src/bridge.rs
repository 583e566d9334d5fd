//! Bridge to the engine's entity stores.
//!
//! [`Primitives`] bundles one facade per entity type over a shared
//! `Arc<Database>`, so handlers can reach any store through a single handle.

use std::sync::Arc;

use chatstore_engine::{
    Database, ElementStore, FeedbackStore, StepStore, ThreadStore, UserStore,
};

/// All entity stores over one database.
pub struct Primitives {
    /// Shared database
    pub db: Arc<Database>,
    /// Users
    pub users: UserStore,
    /// Threads
    pub threads: ThreadStore,
    /// Steps
    pub steps: StepStore,
    /// Elements
    pub elements: ElementStore,
    /// Feedback
    pub feedback: FeedbackStore,
}

impl Primitives {
    /// Build every store over `db`.
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            users: UserStore::new(db.clone()),
            threads: ThreadStore::new(db.clone()),
            steps: StepStore::new(db.clone()),
            elements: ElementStore::new(db.clone()),
            feedback: FeedbackStore::new(db.clone()),
            db,
        }
    }
}
