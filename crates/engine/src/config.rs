//! Store configuration
//!
//! A `StoreConfig` can be built in code or read from TOML:
//!
//! ```toml
//! thread_order = "instant"
//! log_payloads = false
//! default_page_size = 20
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use chatstore_core::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How thread listings order `createdAt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadOrder {
    /// Parse `createdAt` as RFC 3339 and compare instants. Values that do
    /// not parse sort before all parseable ones, lexically among themselves.
    #[default]
    Instant,
    /// Compare `createdAt` strings byte-wise.
    Lexical,
}

/// Runtime configuration for a [`Database`](crate::Database)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Ordering used by thread listings
    pub thread_order: ThreadOrder,
    /// Emit full record JSON at debug level
    pub log_payloads: bool,
    /// Page size used when pagination is given without `first`
    pub default_page_size: Option<usize>,
}

impl StoreConfig {
    /// Parse from a TOML document
    pub fn from_toml_str(s: &str) -> StoreResult<Self> {
        toml::from_str(s).map_err(|e| StoreError::config(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| StoreError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> StoreResult<String> {
        toml::to_string(self).map_err(|e| StoreError::config(e.to_string()))
    }
}
