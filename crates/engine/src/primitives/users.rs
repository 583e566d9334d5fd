//! User store
//!
//! Users are keyed by their identifier, which is also used as the stored
//! id. Creation is idempotent: a second create for the same identifier
//! returns the first record untouched, metadata included.

use crate::database::Database;
use chatstore_core::{NewUser, Timestamp, User};
use std::sync::Arc;
use tracing::info;

/// User store facade
#[derive(Clone)]
pub struct UserStore {
    db: Arc<Database>,
}

impl UserStore {
    /// Create a new user store facade
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Look up a user by identifier
    pub fn get(&self, identifier: &str) -> Option<User> {
        let user = self.db.users.get(identifier);
        info!(identifier, found = user.is_some(), "get user");
        user
    }

    /// Create a user, or return the existing one for this identifier.
    ///
    /// An empty identifier is accepted and stored under the empty key.
    pub fn create(&self, new_user: NewUser) -> User {
        let NewUser {
            identifier,
            metadata,
        } = new_user;

        let (user, created) = self.db.users.get_or_insert_with(identifier.clone(), || User {
            id: identifier.clone(),
            identifier: identifier.clone(),
            metadata,
            created_at: Timestamp::now().to_iso(),
        });

        if created {
            info!(identifier = %user.identifier, "created user");
        } else {
            info!(identifier = %user.identifier, "user already exists");
        }
        user
    }
}
