//! Thread listing inputs and paginated output

use serde::{Deserialize, Serialize};

/// Tri-state feedback filter; unset is `Option::None`
///
/// On the wire this is the integer `0` (no feedback) or `1` (has feedback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum FeedbackPresence {
    /// Threads with no feedback record
    Without,
    /// Threads with at least one feedback record
    With,
}

impl FeedbackPresence {
    /// Whether a thread with the given feedback state passes
    pub fn admits(self, has_feedback: bool) -> bool {
        match self {
            FeedbackPresence::With => has_feedback,
            FeedbackPresence::Without => !has_feedback,
        }
    }
}

impl TryFrom<i64> for FeedbackPresence {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FeedbackPresence::Without),
            1 => Ok(FeedbackPresence::With),
            other => Err(format!("feedback filter must be 0 or 1, got {}", other)),
        }
    }
}

impl From<FeedbackPresence> for i64 {
    fn from(presence: FeedbackPresence) -> Self {
        match presence {
            FeedbackPresence::Without => 0,
            FeedbackPresence::With => 1,
        }
    }
}

/// Thread listing filters; every unset field means "don't filter"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadFilter {
    /// Exact owner match. An empty string matches owner-less threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Feedback presence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackPresence>,
    /// Case-insensitive substring over name and tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ThreadFilter {
    /// No filtering
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep threads owned by `user_id`
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Keep threads by feedback presence
    pub fn feedback(mut self, presence: FeedbackPresence) -> Self {
        self.feedback = Some(presence);
        self
    }

    /// Keep threads whose name or tags contain `search`
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Cursor pagination input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<usize>,
    /// Return entries strictly after the thread with this id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl Pagination {
    /// First page of `first` entries
    pub fn first(first: usize) -> Self {
        Self {
            first: Some(first),
            cursor: None,
        }
    }

    /// Everything after `cursor`
    pub fn after(cursor: impl Into<String>) -> Self {
        Self {
            first: None,
            cursor: Some(cursor.into()),
        }
    }

    /// Set the page size
    pub fn with_first(mut self, first: usize) -> Self {
        self.first = Some(first);
        self
    }

    /// Set the cursor
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// Position of a page within the full result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// More entries follow this page
    pub has_next_page: bool,
    /// Id of the first entry on the page
    pub start_cursor: Option<String>,
    /// Id of the last entry on the page
    pub end_cursor: Option<String>,
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Entries on this page
    pub data: Vec<T>,
    /// Count after filtering, before cursor and page size are applied
    pub total: usize,
    /// Cursor information
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Empty page
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page_info: PageInfo::default(),
        }
    }
}
