//! Thread listing: filter, sort, cursor, page

use chatstore::prelude::*;

use crate::layer;

fn ids(page: &Page<Thread>) -> Vec<&str> {
    page.data.iter().map(|t| t.id.as_str()).collect()
}

async fn seed(dl: &InMemoryDataLayer) {
    dl.update_thread("t1", ThreadUpdate::new().name("Budget review").user_id("u1").tags(["finance"]))
        .await
        .unwrap();
    dl.update_thread("t2", ThreadUpdate::new().name("Standup").user_id("u1").tags(["Daily"]))
        .await
        .unwrap();
    dl.update_thread("t3", ThreadUpdate::new().name("Retro").user_id("u2"))
        .await
        .unwrap();
    dl.update_thread("t4", ThreadUpdate::new().name("Orphan"))
        .await
        .unwrap();
    dl.upsert_feedback(Feedback::new("t2", "s1", 1)).await.unwrap();
    dl.upsert_feedback(Feedback::new("t3", "s9", 0)).await.unwrap();
}

#[tokio::test]
async fn no_inputs_returns_everything_in_creation_order() {
    let dl = layer();
    seed(&dl).await;
    let page = dl.list_threads(None, None).await.unwrap();
    assert_eq!(ids(&page), vec!["t1", "t2", "t3", "t4"]);
    assert_eq!(page.total, 4);
    assert!(!page.page_info.has_next_page);
    assert_eq!(page.page_info.start_cursor.as_deref(), Some("t1"));
    assert_eq!(page.page_info.end_cursor.as_deref(), Some("t4"));
}

#[tokio::test]
async fn owner_filter_is_exact() {
    let dl = layer();
    seed(&dl).await;
    let page = dl
        .list_threads(None, Some(ThreadFilter::new().user_id("u1")))
        .await
        .unwrap();
    assert_eq!(ids(&page), vec!["t1", "t2"]);

    let page = dl
        .list_threads(None, Some(ThreadFilter::new().user_id("U1")))
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn feedback_presence_counts_any_value() {
    let dl = layer();
    seed(&dl).await;

    let with = dl
        .list_threads(None, Some(ThreadFilter::new().feedback(FeedbackPresence::With)))
        .await
        .unwrap();
    assert_eq!(ids(&with), vec!["t2", "t3"]);

    let without = dl
        .list_threads(None, Some(ThreadFilter::new().feedback(FeedbackPresence::Without)))
        .await
        .unwrap();
    assert_eq!(ids(&without), vec!["t1", "t4"]);
}

#[tokio::test]
async fn search_matches_name_or_tag_case_insensitively() {
    let dl = layer();
    seed(&dl).await;

    let by_tag = dl
        .list_threads(None, Some(ThreadFilter::new().search("daily")))
        .await
        .unwrap();
    assert_eq!(ids(&by_tag), vec!["t2"]);

    let by_name = dl
        .list_threads(None, Some(ThreadFilter::new().search("BUDGET")))
        .await
        .unwrap();
    assert_eq!(ids(&by_name), vec!["t1"]);

    let by_fragment = dl
        .list_threads(None, Some(ThreadFilter::new().search("re")))
        .await
        .unwrap();
    assert_eq!(ids(&by_fragment), vec!["t1", "t3"]);
}

#[tokio::test]
async fn filters_compose() {
    let dl = layer();
    seed(&dl).await;
    let page = dl
        .list_threads(
            None,
            Some(
                ThreadFilter::new()
                    .user_id("u1")
                    .feedback(FeedbackPresence::Without)
                    .search("budget"),
            ),
        )
        .await
        .unwrap();
    assert_eq!(ids(&page), vec!["t1"]);
}

#[tokio::test]
async fn cursor_walks_the_filtered_sequence() {
    let dl = layer();
    seed(&dl).await;

    let mut cursor: Option<String> = None;
    let mut seen = Vec::new();
    loop {
        let mut pagination = Pagination::first(1);
        if let Some(c) = cursor.take() {
            pagination = pagination.with_cursor(c);
        }
        let page = dl.list_threads(Some(pagination), None).await.unwrap();
        assert_eq!(page.total, 4);
        seen.extend(page.data.iter().map(|t| t.id.clone()));
        if !page.page_info.has_next_page {
            break;
        }
        cursor = page.page_info.end_cursor.clone();
    }
    assert_eq!(seen, vec!["t1", "t2", "t3", "t4"]);
}

#[tokio::test]
async fn cursor_to_filtered_out_thread_yields_empty_page() {
    let dl = layer();
    seed(&dl).await;
    let page = dl
        .list_threads(
            Some(Pagination::after("t3")),
            Some(ThreadFilter::new().user_id("u1")),
        )
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total, 2);
    assert!(!page.page_info.has_next_page);
    assert!(page.page_info.start_cursor.is_none());
    assert!(page.page_info.end_cursor.is_none());
}

#[tokio::test]
async fn cursor_at_last_thread_yields_empty_page() {
    let dl = layer();
    seed(&dl).await;
    let page = dl
        .list_threads(Some(Pagination::first(10).with_cursor("t4")), None)
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert!(!page.page_info.has_next_page);
}

#[tokio::test]
async fn recreated_thread_moves_to_the_end() {
    let dl = layer();
    seed(&dl).await;
    dl.delete_thread("t1").await.unwrap();
    dl.update_thread("t1", ThreadUpdate::new().name("Budget review"))
        .await
        .unwrap();

    let page = dl.list_threads(None, None).await.unwrap();
    assert_eq!(ids(&page), vec!["t2", "t3", "t4", "t1"]);
}

#[tokio::test]
async fn default_page_size_applies_when_first_is_missing() {
    crate::init_tracing();
    let dl = InMemoryDataLayer::with_config(StoreConfig {
        default_page_size: Some(2),
        ..StoreConfig::default()
    });
    seed(&dl).await;

    let page = dl
        .list_threads(Some(Pagination::default()), None)
        .await
        .unwrap();
    assert_eq!(ids(&page), vec!["t1", "t2"]);
    assert!(page.page_info.has_next_page);

    let page = dl
        .list_threads(Some(Pagination::first(3)), None)
        .await
        .unwrap();
    assert_eq!(page.data.len(), 3);

    let page = dl.list_threads(None, None).await.unwrap();
    assert_eq!(page.data.len(), 4);
}
