//! Creation timestamps
//!
//! Records store `createdAt` as an ISO-8601 string because that is what the
//! host framework reads back. Everything the store itself produces goes
//! through [`Timestamp::to_iso`], which always emits the same fixed-width
//! form: UTC, microsecond precision, `+00:00` offset.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// A UTC instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current wall-clock time
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Parse an RFC 3339 string with any offset. Returns `None` if the
    /// string is not a valid RFC 3339 timestamp.
    pub fn parse(s: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| Timestamp(dt.with_timezone(&Utc)))
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS.ffffff+00:00`
    pub fn to_iso(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }
}
