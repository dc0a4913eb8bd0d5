use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use vitrine::{
    application::{feedback::FeedbackService, repos::FeedbackRepo},
    domain::feedback::{FeedbackEvent, base_reward},
    infra::store::JsonFileStore,
};

fn store(dir: &TempDir) -> Arc<JsonFileStore> {
    Arc::new(JsonFileStore::new(
        dir.path().join("config.json"),
        dir.path().join("nested").join("feedback.json"),
    ))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_are_not_lost() {
    let dir = TempDir::new().expect("tempdir");
    let service = Arc::new(FeedbackService::new(store(&dir)));

    let tasks: Vec<_> = (0..24)
        .map(|index| {
            let service = service.clone();
            tokio::spawn(async move {
                let event = FeedbackEvent::named("edit").with_details(json!({ "index": index }));
                service.record(event).await.expect("record")
            })
        })
        .collect();

    for task in tasks {
        let ack = task.await.expect("task");
        assert_eq!(ack.reward, -1);
    }

    assert_eq!(service.history().await.len(), 24);
}

#[tokio::test]
async fn history_survives_a_new_store_instance() {
    let dir = TempDir::new().expect("tempdir");
    FeedbackService::new(store(&dir))
        .record(FeedbackEvent::named("publish"))
        .await
        .expect("record");

    let reopened = store(&dir);
    let events = reopened.list_events().await.expect("list");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event, "publish");
}

#[tokio::test]
async fn log_file_is_a_pretty_json_array() {
    let dir = TempDir::new().expect("tempdir");
    let store = store(&dir);
    store
        .append_event(&FeedbackEvent::named("like"))
        .await
        .expect("append");

    let raw = std::fs::read_to_string(store.feedback_path()).expect("log written");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(parsed, json!([{ "event": "like" }]));
    assert!(raw.contains('\n'));
}

#[tokio::test]
async fn append_keeps_entries_written_by_other_tools() {
    let dir = TempDir::new().expect("tempdir");
    let store = store(&dir);
    std::fs::create_dir_all(store.feedback_path().parent().expect("parent")).expect("mkdir");
    std::fs::write(
        store.feedback_path(),
        r#"[{"event":"like"},{"event":"publish"},{"event":"edit","timestamp":1700000000}]"#,
    )
    .expect("seed log");

    store
        .append_event(&FeedbackEvent::named("save_config"))
        .await
        .expect("append");

    let raw = std::fs::read_to_string(store.feedback_path()).expect("log");
    let entries: Vec<serde_json::Value> = serde_json::from_str(&raw).expect("json array");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[2], json!({ "event": "edit", "timestamp": 1700000000 }));
    assert_eq!(entries[3]["event"], "save_config");
}

#[tokio::test]
async fn log_that_is_not_an_array_is_moved_aside() {
    let dir = TempDir::new().expect("tempdir");
    let store = store(&dir);
    let parent = store.feedback_path().parent().expect("parent").to_path_buf();
    std::fs::create_dir_all(&parent).expect("mkdir");
    std::fs::write(store.feedback_path(), r#"{"event":"like"}"#).expect("seed log");

    store
        .append_event(&FeedbackEvent::named("publish"))
        .await
        .expect("append");

    let kept = std::fs::read_to_string(parent.join("feedback.json.corrupt")).expect("kept aside");
    assert_eq!(kept, r#"{"event":"like"}"#);
    assert_eq!(store.list_events().await.expect("list").len(), 1);
}

#[tokio::test]
async fn missing_log_reads_as_empty_history() {
    let dir = TempDir::new().expect("tempdir");
    let service = FeedbackService::new(store(&dir));
    assert!(service.history().await.is_empty());
}

#[test]
fn reward_table_spot_checks() {
    for (event, reward) in [
        ("like", 5),
        ("dislike", -3),
        ("apply_liquid_design", 4),
        ("follow_ai_suggestion", 4),
        ("reduce_motion", 2),
        ("mystery", 0),
    ] {
        assert_eq!(base_reward(event), reward, "{event}");
    }
}
