//! User command handlers.

use std::sync::Arc;

use chatstore_core::NewUser;

use crate::bridge::Primitives;
use crate::{Output, Result};

/// Handle UserGet command.
pub fn user_get(p: &Arc<Primitives>, identifier: String) -> Result<Output> {
    Ok(Output::MaybeUser(p.users.get(&identifier)))
}

/// Handle UserCreate command.
pub fn user_create(p: &Arc<Primitives>, user: NewUser) -> Result<Output> {
    Ok(Output::User(p.users.create(user)))
}
