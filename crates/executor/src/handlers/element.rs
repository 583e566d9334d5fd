//! Element command handlers.

use std::sync::Arc;

use chatstore_core::Element;

use crate::bridge::Primitives;
use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle ElementCreate command.
pub fn element_create(p: &Arc<Primitives>, element: Element) -> Result<Output> {
    convert_result(p.elements.create(element))?;
    Ok(Output::Unit)
}

/// Handle ElementGet command.
pub fn element_get(p: &Arc<Primitives>, thread_id: String, element_id: String) -> Result<Output> {
    Ok(Output::MaybeElement(p.elements.get(&thread_id, &element_id)))
}

/// Handle ElementDelete command.
pub fn element_delete(p: &Arc<Primitives>, element_id: String) -> Result<Output> {
    Ok(Output::Bool(p.elements.delete(&element_id)))
}
