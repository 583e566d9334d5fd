//! Open-ended field maps for caller-defined record data
//!
//! Steps and elements carry a handful of required keys plus whatever the
//! host framework puts alongside them. [`Fields`] holds the latter: a
//! newtype over `serde_json::Map` that serializes transparently, so when it
//! is `#[serde(flatten)]`ed into a record the extra keys sit next to `id`
//! and `threadId` on the wire.
//!
//! # Examples
//!
//! ```
//! use chatstore_core::Fields;
//! use serde_json::json;
//!
//! let mut stored = Fields::new();
//! stored.set("input", json!("Hello"));
//! stored.set("output", json!("World"));
//!
//! let mut patch = Fields::new();
//! patch.set("output", json!("Universe"));
//!
//! stored.merge_from(patch);
//! assert_eq!(stored.get("input"), Some(&json!("Hello")));
//! assert_eq!(stored.get("output"), Some(&json!("Universe")));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// String-keyed JSON fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(Map<String, Value>);

impl Fields {
    /// Create an empty field map
    pub fn new() -> Self {
        Fields(Map::new())
    }

    /// Set a field, returning the previous value if any
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`Fields::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Shallow merge: every key in `patch` overwrites the key here, keys
    /// absent from `patch` are left untouched. Nested objects are replaced,
    /// not merged.
    pub fn merge_from(&mut self, patch: Fields) {
        for (key, value) in patch.0 {
            self.0.insert(key, value);
        }
    }

    /// Serialize to a compact JSON string
    pub fn to_json_string(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

impl Deref for Fields {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Fields {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(map: Map<String, Value>) -> Self {
        Fields(map)
    }
}

impl From<Fields> for Map<String, Value> {
    fn from(fields: Fields) -> Self {
        fields.0
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Fields(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
