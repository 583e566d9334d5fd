//! Pagination laws
//!
//! For any population and filter, walking the listing page by page with
//! cursors visits exactly the unpaginated result, in order, and `total`
//! never depends on pagination.

use chatstore::prelude::*;
use chatstore_engine::{FeedbackStore, ThreadStore};
use proptest::prelude::*;

fn populate(owners: &[u8], rated: &[bool]) -> ThreadStore {
    let db = Database::new();
    let threads = ThreadStore::new(db.clone());
    let feedback = FeedbackStore::new(db);
    for (i, owner) in owners.iter().enumerate() {
        let id = format!("t{:03}", i);
        threads.update(&id, ThreadUpdate::new().user_id(format!("u{}", owner % 3)));
        if rated.get(i).copied().unwrap_or(false) {
            feedback.upsert(Feedback::new(id, "s", 1));
        }
    }
    threads
}

fn filter_for(choice: u8) -> Option<ThreadFilter> {
    match choice % 4 {
        0 => None,
        1 => Some(ThreadFilter::new().user_id("u1")),
        2 => Some(ThreadFilter::new().feedback(FeedbackPresence::With)),
        _ => Some(ThreadFilter::new().feedback(FeedbackPresence::Without).user_id("u0")),
    }
}

proptest! {
    #[test]
    fn pages_partition_the_listing(
        owners in prop::collection::vec(any::<u8>(), 0..40),
        rated in prop::collection::vec(any::<bool>(), 0..40),
        page_size in 1usize..7,
        filter_choice in any::<u8>(),
    ) {
        let threads = populate(&owners, &rated);
        let filter = filter_for(filter_choice);

        let everything = threads.list(None, filter.as_ref());
        let expected: Vec<String> = everything.data.iter().map(|t| t.id.clone()).collect();
        prop_assert_eq!(everything.total, expected.len());

        let mut walked = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let mut pagination = Pagination::first(page_size);
            if let Some(c) = cursor.take() {
                pagination = pagination.with_cursor(c);
            }
            let page = threads.list(Some(&pagination), filter.as_ref());
            prop_assert_eq!(page.total, everything.total);
            prop_assert!(page.data.len() <= page_size);
            walked.extend(page.data.iter().map(|t| t.id.clone()));
            if !page.page_info.has_next_page {
                break;
            }
            cursor = page.page_info.end_cursor.clone();
            prop_assert!(cursor.is_some());
        }
        prop_assert_eq!(walked, expected);
    }

    #[test]
    fn owner_filter_never_leaks(
        owners in prop::collection::vec(any::<u8>(), 0..40),
    ) {
        let threads = populate(&owners, &[]);
        let page = threads.list(None, Some(&ThreadFilter::new().user_id("u2")));
        prop_assert!(page.data.iter().all(|t| t.user_id == "u2"));
        let expected = owners.iter().filter(|o| *o % 3 == 2).count();
        prop_assert_eq!(page.total, expected);
    }
}
