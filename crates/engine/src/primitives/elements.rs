//! Element store
//!
//! Elements use whole-record upsert: `create` on an existing id replaces
//! the stored record entirely.

use crate::database::Database;
use chatstore_core::{Element, StoreResult};
use std::sync::Arc;
use tracing::info;

/// Element store facade
#[derive(Clone)]
pub struct ElementStore {
    db: Arc<Database>,
}

impl ElementStore {
    /// Create a new element store facade
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert or replace an element.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: `id` is empty
    pub fn create(&self, element: Element) -> StoreResult<()> {
        element.validate()?;
        info!(element_id = %element.id, thread_id = ?element.thread_id, "upserting element");
        self.db.elements.put(element.id.clone(), element);
        Ok(())
    }

    /// Copy of a stored element. Lookup is by element id alone;
    /// `thread_id` is accepted for the host contract but not checked.
    pub fn get(&self, thread_id: &str, element_id: &str) -> Option<Element> {
        let element = self.db.elements.get(element_id);
        info!(thread_id, element_id, found = element.is_some(), "get element");
        element
    }

    /// Remove an element. Returns true if it existed.
    pub fn delete(&self, element_id: &str) -> bool {
        let existed = self.db.elements.remove(element_id).is_some();
        info!(element_id, existed, "delete element");
        existed
    }
}
