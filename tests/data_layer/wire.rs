//! JSON command boundary
//!
//! Records cross the boundary in the host framework's camelCase shapes,
//! with step and element extension fields flattened into the object.

use chatstore::{Database, Error, Executor};
use serde_json::{json, Value};

fn run(ex: &Executor, cmd: Value) -> Value {
    let out = ex.execute_json(&cmd.to_string()).unwrap();
    serde_json::from_str(&out).unwrap()
}

fn executor() -> Executor {
    crate::init_tracing();
    Executor::new(Database::new())
}

#[test]
fn thread_view_shape() {
    let ex = executor();
    run(
        &ex,
        json!({"ThreadUpdate": {"threadId": "t1", "update": {"name": "Chat", "userId": "u1", "tags": ["a"]}}}),
    );
    run(
        &ex,
        json!({"StepCreate": {"step": {"id": "s1", "threadId": "t1", "type": "user_message", "output": "hi"}}}),
    );
    run(
        &ex,
        json!({"ElementCreate": {"element": {"id": "e1", "threadId": "t1", "mime": "image/png"}}}),
    );

    let out = run(&ex, json!({"ThreadGet": {"threadId": "t1"}}));
    let view = &out["MaybeThreadView"];
    assert_eq!(view["id"], json!("t1"));
    assert_eq!(view["name"], json!("Chat"));
    assert_eq!(view["userId"], json!("u1"));
    assert_eq!(view["userIdentifier"], json!("u1"));
    assert_eq!(view["tags"], json!(["a"]));
    assert_eq!(view["metadata"], json!({}));
    assert!(view["createdAt"].is_string());
    assert_eq!(
        view["steps"],
        json!([{"id": "s1", "threadId": "t1", "type": "user_message", "output": "hi"}])
    );
    assert_eq!(
        view["elements"],
        json!([{"id": "e1", "threadId": "t1", "mime": "image/png"}])
    );
}

#[test]
fn missing_thread_is_null() {
    let ex = executor();
    let out = run(&ex, json!({"ThreadGet": {"threadId": "nope"}}));
    assert_eq!(out, json!({"MaybeThreadView": null}));
}

#[test]
fn feedback_shape_and_derived_id() {
    let ex = executor();
    let out = run(
        &ex,
        json!({"FeedbackUpsert": {"feedback": {"threadId": "t1", "forId": "s1", "value": 1, "comment": "nice"}}}),
    );
    assert_eq!(out, json!({"Text": "THREAD#t1::STEP#s1"}));

    let out = run(&ex, json!({"FeedbackDelete": {"feedbackId": "THREAD#t1::STEP#s1"}}));
    assert_eq!(out, json!({"Bool": true}));
}

#[test]
fn feedback_filter_accepts_zero_and_one_only() {
    let ex = executor();
    run(&ex, json!({"ThreadUpdate": {"threadId": "t1"}}));

    let out = run(&ex, json!({"ThreadList": {"filter": {"feedback": 0}}}));
    assert_eq!(out["ThreadPage"]["total"], json!(1));
    let out = run(&ex, json!({"ThreadList": {"filter": {"feedback": 1}}}));
    assert_eq!(out["ThreadPage"]["total"], json!(0));

    let err = ex
        .execute_json(&json!({"ThreadList": {"filter": {"feedback": 2}}}).to_string())
        .unwrap_err();
    assert!(matches!(err, Error::Serialization { .. }));
}

#[test]
fn empty_page_has_null_cursors() {
    let ex = executor();
    let out = run(&ex, json!({"ThreadList": {"pagination": {"first": 5}}}));
    assert_eq!(
        out,
        json!({"ThreadPage": {
            "data": [],
            "total": 0,
            "pageInfo": {"hasNextPage": false, "startCursor": null, "endCursor": null}
        }})
    );
}

#[test]
fn element_without_id_is_rejected() {
    let ex = executor();
    let err = ex
        .execute_json(&json!({"ElementCreate": {"element": {"threadId": "t1"}}}).to_string())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test]
fn null_step_thread_id_is_invalid_input() {
    let ex = executor();
    let err = ex
        .execute_json(&json!({"StepCreate": {"step": {"id": "s1", "threadId": null}}}).to_string())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));

    run(&ex, json!({"StepCreate": {"step": {"id": "s1", "threadId": "t1"}}}));
    let err = ex
        .execute_json(&json!({"StepUpdate": {"step": {"id": "s1", "threadId": null}}}).to_string())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test]
fn null_element_id_is_invalid_input() {
    let ex = executor();
    let err = ex
        .execute_json(&json!({"ElementCreate": {"element": {"id": null, "threadId": "t1"}}}).to_string())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test]
fn null_feedback_thread_id_is_stored_but_not_counted() {
    let ex = executor();
    run(&ex, json!({"ThreadUpdate": {"threadId": "t1"}}));

    let out = run(
        &ex,
        json!({"FeedbackUpsert": {"feedback": {"threadId": null, "forId": "s1", "value": 1}}}),
    );
    assert_eq!(out, json!({"Text": "THREAD#::STEP#s1"}));
    assert_eq!(run(&ex, json!("Info"))["Info"]["feedback"], json!(1));

    let out = run(&ex, json!({"ThreadList": {"filter": {"feedback": 0}}}));
    assert_eq!(out["ThreadPage"]["data"][0]["id"], json!("t1"));
    let out = run(&ex, json!({"ThreadList": {"filter": {"feedback": 1}}}));
    assert_eq!(out["ThreadPage"]["total"], json!(0));
}

#[test]
fn malformed_command_is_a_serialization_error() {
    let ex = executor();
    let err = ex.execute_json("{\"NoSuchCommand\": {}}").unwrap_err();
    assert!(matches!(err, Error::Serialization { .. }));
}
