//! Thread listing pipeline
//!
//! Listing runs four stages over a full copy of the thread collection:
//!
//! ```text
//! snapshot -> filter (owner, feedback, search) -> sort by createdAt
//!          -> cursor slice -> page size
//! ```
//!
//! Each stage is a linear pass; there are no secondary indexes. The stages
//! are plain functions over owned vectors so they can be tested without a
//! database.

use crate::config::ThreadOrder;
use chatstore_core::{Page, PageInfo, Pagination, Thread, ThreadFilter, Timestamp};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// Apply owner, feedback-presence and search filters in that order.
///
/// `feedback_thread_ids` is only invoked when the filter asks for feedback
/// presence, so callers can defer the feedback scan.
pub fn apply_filters<F>(
    mut threads: Vec<Thread>,
    filter: &ThreadFilter,
    feedback_thread_ids: F,
) -> Vec<Thread>
where
    F: FnOnce() -> HashSet<String>,
{
    if let Some(user_id) = filter.user_id.as_deref() {
        threads.retain(|t| t.user_id == user_id);
        debug!(user_id, remaining = threads.len(), "filtered by owner");
    }

    if let Some(presence) = filter.feedback {
        let with_feedback = feedback_thread_ids();
        threads.retain(|t| presence.admits(with_feedback.contains(&t.id)));
        debug!(?presence, remaining = threads.len(), "filtered by feedback");
    }

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        threads.retain(|t| t.matches_search(&needle));
        debug!(search, remaining = threads.len(), "filtered by search");
    }

    threads
}

/// Stable ascending sort by `createdAt`.
pub fn sort_by_creation(threads: &mut Vec<Thread>, order: ThreadOrder) {
    match order {
        ThreadOrder::Lexical => threads.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        ThreadOrder::Instant => {
            let mut keyed: Vec<(Option<Timestamp>, Thread)> = threads
                .drain(..)
                .map(|t| (Timestamp::parse(&t.created_at), t))
                .collect();
            keyed.sort_by(|(ka, a), (kb, b)| compare_instants(ka, kb, a, b));
            threads.extend(keyed.into_iter().map(|(_, t)| t));
        }
    }
}

fn compare_instants(
    ka: &Option<Timestamp>,
    kb: &Option<Timestamp>,
    a: &Thread,
    b: &Thread,
) -> Ordering {
    match (ka, kb) {
        (Some(x), Some(y)) => x.cmp(y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => a.created_at.cmp(&b.created_at),
    }
}

/// Cursor slice, then truncate to the page size.
///
/// `total` in the result is the length of `threads` as passed in, i.e. the
/// filtered count before the cursor is applied. A cursor that names no
/// thread in `threads` yields an empty page. An empty cursor string is
/// treated as no cursor.
pub fn paginate(
    mut threads: Vec<Thread>,
    pagination: Option<&Pagination>,
    default_page_size: Option<usize>,
) -> Page<Thread> {
    let total = threads.len();

    let cursor = pagination
        .and_then(|p| p.cursor.as_deref())
        .filter(|c| !c.is_empty());
    let remaining = match cursor {
        None => threads,
        Some(cursor) => match threads.iter().position(|t| t.id == cursor) {
            Some(idx) => threads.split_off(idx + 1),
            None => {
                debug!(cursor, "cursor not in filtered set");
                Vec::new()
            }
        },
    };

    let limit = pagination.and_then(|p| p.first.or(default_page_size));
    let has_next_page = limit.map_or(false, |n| remaining.len() > n);

    let mut data = remaining;
    if let Some(n) = limit {
        data.truncate(n);
    }

    let page_info = PageInfo {
        has_next_page,
        start_cursor: data.first().map(|t| t.id.clone()),
        end_cursor: data.last().map(|t| t.id.clone()),
    };

    Page {
        data,
        total,
        page_info,
    }
}
