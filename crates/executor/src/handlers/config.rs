//! Config and info command handlers.
//!
//! Handles Info, ConfigGet and ConfigSet.

use std::sync::Arc;

use chatstore_engine::StoreConfig;

use crate::bridge::Primitives;
use crate::{Output, Result};

/// Handle Info command: entry counts per collection.
pub fn info(p: &Arc<Primitives>) -> Result<Output> {
    Ok(Output::Info(p.db.info()))
}

/// Handle ConfigGet command: return the current configuration.
pub fn config_get(p: &Arc<Primitives>) -> Result<Output> {
    Ok(Output::Config(p.db.config()))
}

/// Handle ConfigSet command: replace the configuration wholesale.
pub fn config_set(p: &Arc<Primitives>, config: StoreConfig) -> Result<Output> {
    p.db.update_config(|cfg| *cfg = config);
    Ok(Output::Unit)
}
