//! Step command handlers.

use std::sync::Arc;

use chatstore_core::Step;

use crate::bridge::Primitives;
use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle StepCreate command. `Bool(false)` means the id already existed.
pub fn step_create(p: &Arc<Primitives>, step: Step) -> Result<Output> {
    let inserted = convert_result(p.steps.create(step))?;
    Ok(Output::Bool(inserted))
}

/// Handle StepUpdate command.
pub fn step_update(p: &Arc<Primitives>, step: Step) -> Result<Output> {
    let merged = convert_result(p.steps.update(step))?;
    Ok(Output::Step(merged))
}

/// Handle StepDelete command.
pub fn step_delete(p: &Arc<Primitives>, step_id: String) -> Result<Output> {
    Ok(Output::Bool(p.steps.delete(&step_id)))
}
