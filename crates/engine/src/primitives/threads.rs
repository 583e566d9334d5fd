//! Thread store
//!
//! Threads have no explicit create. The first [`ThreadStore::update`] for
//! an unseen id synthesizes the thread with defaults and stamps
//! `createdAt`; later updates replace only the fields they carry.
//!
//! Listing and the joined fetch read the thread collection first and the
//! feedback/step/element collections afterwards, never holding two
//! collection locks at once.

use crate::database::Database;
use crate::query;
use chatstore_core::{
    Page, Pagination, Thread, ThreadFilter, ThreadUpdate, ThreadView, Timestamp,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Thread store facade
#[derive(Clone)]
pub struct ThreadStore {
    db: Arc<Database>,
}

impl ThreadStore {
    /// Create a new thread store facade
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Create-or-update a thread. Returns a copy of the stored record.
    pub fn update(&self, thread_id: &str, update: ThreadUpdate) -> Thread {
        info!(thread_id, user_id = ?update.user_id, "updating thread");

        let created_at = Timestamp::now().to_iso();
        let (thread, created) = self.db.threads.upsert_with(
            thread_id,
            update,
            |update| Thread::create(thread_id, created_at, update),
            |existing, update| existing.apply(update),
        );

        if created {
            info!(thread_id, "created new thread");
        }
        thread
    }

    /// Copy of the stored thread, without steps or elements
    pub fn get_record(&self, thread_id: &str) -> Option<Thread> {
        self.db.threads.get(thread_id)
    }

    /// Owner of a thread, or `None` if the thread does not exist
    pub fn author(&self, thread_id: &str) -> Option<String> {
        let author = self.db.threads.get(thread_id).map(|t| t.user_id);
        info!(thread_id, author = ?author, "get thread author");
        author
    }

    /// Remove a thread. Returns true if it existed. Steps, elements and
    /// feedback referencing it are left in place.
    pub fn delete(&self, thread_id: &str) -> bool {
        let existed = self.db.threads.remove(thread_id).is_some();
        info!(thread_id, existed, "delete thread");
        existed
    }

    /// Thread plus every step and element whose `threadId` matches, each in
    /// its collection's insertion order. `None` if the thread is unknown.
    pub fn get(&self, thread_id: &str) -> Option<ThreadView> {
        let Some(thread) = self.db.threads.get(thread_id) else {
            info!(thread_id, "thread not found");
            return None;
        };

        let steps = self.db.steps.scan(|s| s.thread_id == thread_id);
        let elements = self.db.elements.scan(|e| e.belongs_to(thread_id));
        info!(
            thread_id,
            steps = steps.len(),
            elements = elements.len(),
            "found thread"
        );

        let view = ThreadView {
            thread,
            steps,
            elements,
        };
        if self.db.log_payloads() {
            if let Ok(payload) = serde_json::to_string(&view) {
                debug!(thread_id, %payload, "returning thread");
            }
        }
        Some(view)
    }

    /// Filter, sort and paginate threads.
    ///
    /// `None` for either argument means no filtering / a single page with
    /// everything left after the cursor.
    pub fn list(
        &self,
        pagination: Option<&Pagination>,
        filter: Option<&ThreadFilter>,
    ) -> Page<Thread> {
        let config = self.db.config();
        let threads = self.db.threads.snapshot();
        info!(count = threads.len(), "listing threads");

        let mut threads = match filter {
            Some(filter) => query::apply_filters(threads, filter, || self.feedback_thread_ids()),
            None => threads,
        };
        query::sort_by_creation(&mut threads, config.thread_order);

        let page = query::paginate(threads, pagination, config.default_page_size);
        info!(
            returned = page.data.len(),
            total = page.total,
            has_next_page = page.page_info.has_next_page,
            "listed threads"
        );
        page
    }

    fn feedback_thread_ids(&self) -> HashSet<String> {
        self.db
            .feedback
            .snapshot()
            .into_iter()
            .filter(|f| !f.thread_id.is_empty())
            .map(|f| f.thread_id)
            .collect()
    }
}
