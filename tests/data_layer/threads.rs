//! Thread lifecycle and the joined fetch

use chatstore::prelude::*;
use serde_json::json;

use crate::layer;

#[tokio::test]
async fn first_update_creates_thread() {
    let dl = layer();
    assert!(dl.get_thread_author("t1").await.unwrap().is_none());

    let thread = dl
        .update_thread("t1", ThreadUpdate::new().user_id("alice"))
        .await
        .unwrap();
    assert_eq!(thread.id, "t1");
    assert_eq!(thread.user_identifier, "alice");
    assert_eq!(dl.get_thread_author("t1").await.unwrap().as_deref(), Some("alice"));
}

#[tokio::test]
async fn later_updates_touch_only_given_fields() {
    let dl = layer();
    let created = dl
        .update_thread(
            "t1",
            ThreadUpdate::new()
                .name("Weekly sync")
                .user_id("alice")
                .metadata(Fields::new().with("color", "blue"))
                .tags(["team"]),
        )
        .await
        .unwrap();

    let updated = dl
        .update_thread("t1", ThreadUpdate::new().user_id("bob").tags(["team", "ops"]))
        .await
        .unwrap();

    assert_eq!(updated.name, "Weekly sync");
    assert_eq!(updated.user_id, "bob");
    assert_eq!(updated.user_identifier, "alice");
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.metadata.get("color"), Some(&json!("blue")));
    assert_eq!(updated.tags, vec!["team".to_string(), "ops".to_string()]);
}

#[tokio::test]
async fn get_thread_joins_by_thread_id() {
    let dl = layer();
    dl.update_thread("t1", ThreadUpdate::new().name("One")).await.unwrap();
    dl.create_step(Step::new("s1", "t1")).await.unwrap();
    dl.create_step(Step::new("s2", "t2")).await.unwrap();
    dl.create_step(Step::new("s3", "t1")).await.unwrap();
    dl.create_element(Element::new("e1", "t1")).await.unwrap();
    dl.create_element(Element::new("e2", "t2")).await.unwrap();

    let view = dl.get_thread("t1").await.unwrap().unwrap();
    let steps: Vec<&str> = view.steps.iter().map(|s| s.id.as_str()).collect();
    let elements: Vec<&str> = view.elements.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(steps, vec!["s1", "s3"]);
    assert_eq!(elements, vec!["e1"]);
}

#[tokio::test]
async fn get_thread_returns_a_copy() {
    let dl = layer();
    dl.update_thread("t1", ThreadUpdate::new().name("Original")).await.unwrap();
    dl.create_step(Step::new("s1", "t1").with("output", "x")).await.unwrap();

    let mut view = dl.get_thread("t1").await.unwrap().unwrap();
    view.thread.name = "Changed".into();
    view.steps.clear();

    let fresh = dl.get_thread("t1").await.unwrap().unwrap();
    assert_eq!(fresh.thread.name, "Original");
    assert_eq!(fresh.steps.len(), 1);
}

#[tokio::test]
async fn delete_thread_leaves_children() {
    let dl = layer();
    dl.update_thread("t1", ThreadUpdate::new()).await.unwrap();
    dl.create_step(Step::new("s1", "t1")).await.unwrap();
    dl.upsert_feedback(Feedback::new("t1", "s1", 1)).await.unwrap();

    assert!(dl.delete_thread("t1").await.unwrap());
    assert!(!dl.delete_thread("t1").await.unwrap());

    let info = dl.database().info();
    assert_eq!(info.threads, 0);
    assert_eq!(info.steps, 1);
    assert_eq!(info.feedback, 1);

    // Re-creating the thread picks the orphaned step back up.
    dl.update_thread("t1", ThreadUpdate::new()).await.unwrap();
    assert_eq!(dl.get_thread("t1").await.unwrap().unwrap().steps.len(), 1);
}

#[tokio::test]
async fn debug_url_is_always_empty() {
    let dl = layer();
    dl.update_thread("t1", ThreadUpdate::new()).await.unwrap();
    assert_eq!(dl.build_debug_url("t1").await.unwrap(), "");
    assert_eq!(dl.build_debug_url("unknown").await.unwrap(), "");
}
