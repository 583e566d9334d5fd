//! Thread command handlers.

use std::sync::Arc;

use chatstore_core::{Pagination, ThreadFilter, ThreadUpdate};

use crate::bridge::Primitives;
use crate::{Output, Result};

/// Handle ThreadUpdate command.
pub fn thread_update(p: &Arc<Primitives>, thread_id: String, update: ThreadUpdate) -> Result<Output> {
    Ok(Output::Thread(p.threads.update(&thread_id, update)))
}

/// Handle ThreadGet command.
pub fn thread_get(p: &Arc<Primitives>, thread_id: String) -> Result<Output> {
    Ok(Output::MaybeThreadView(p.threads.get(&thread_id)))
}

/// Handle ThreadAuthor command.
pub fn thread_author(p: &Arc<Primitives>, thread_id: String) -> Result<Output> {
    Ok(Output::MaybeText(p.threads.author(&thread_id)))
}

/// Handle ThreadDelete command.
pub fn thread_delete(p: &Arc<Primitives>, thread_id: String) -> Result<Output> {
    Ok(Output::Bool(p.threads.delete(&thread_id)))
}

/// Handle ThreadList command.
pub fn thread_list(
    p: &Arc<Primitives>,
    pagination: Option<Pagination>,
    filter: Option<ThreadFilter>,
) -> Result<Output> {
    let page = p.threads.list(pagination.as_ref(), filter.as_ref());
    Ok(Output::ThreadPage(page))
}

/// Handle DebugUrl command. There is no debug UI behind this store.
pub fn debug_url(_p: &Arc<Primitives>, _thread_id: String) -> Result<Output> {
    Ok(Output::Text(String::new()))
}
