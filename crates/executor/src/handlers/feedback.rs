//! Feedback command handlers.

use std::sync::Arc;

use chatstore_core::Feedback;

use crate::bridge::Primitives;
use crate::{Output, Result};

/// Handle FeedbackUpsert command. Returns the derived feedback id.
pub fn feedback_upsert(p: &Arc<Primitives>, feedback: Feedback) -> Result<Output> {
    Ok(Output::Text(p.feedback.upsert(feedback)))
}

/// Handle FeedbackDelete command.
pub fn feedback_delete(p: &Arc<Primitives>, feedback_id: String) -> Result<Output> {
    Ok(Output::Bool(p.feedback.delete(&feedback_id)))
}
