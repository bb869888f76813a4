use crate::common::TestStateBuilder;
use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_note_lifecycle() {
    let ctx = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");
    let client = ctx.client();

    let response = client
        .post_json(
            "/api/notes",
            &json!({ "title": "Photosynthesis", "content": "# Light\nChlorophyll" }),
        )
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Note created");
    let id = body["id"].as_i64().expect("numeric id");

    let notes: Vec<Value> = client.get("/api/notes").await.json();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["id"], id);
    assert_eq!(notes[0]["title"], "Photosynthesis");
    // Stored SQLite form, space separated: YYYY-MM-DD HH:MM:SS
    let created_at = notes[0]["created_at"].as_str().expect("created_at");
    assert_eq!(created_at.len(), 19);
    assert_eq!(&created_at[10..11], " ");
    assert!(!created_at.contains('T'));

    let response = client
        .put_json(
            &format!("/api/notes/{id}"),
            &json!({ "title": "Photosynthesis (revised)", "content": "Updated" }),
        )
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Note updated");

    let notes: Vec<Value> = client.get("/api/notes").await.json();
    assert_eq!(notes[0]["title"], "Photosynthesis (revised)");
    assert_eq!(notes[0]["content"], "Updated");

    let response = client.delete(&format!("/api/notes/{id}")).await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Note deleted");

    let notes: Vec<Value> = client.get("/api/notes").await.json();
    assert!(notes.iter().all(|n| n["id"] != id));
}

#[tokio::test]
async fn test_notes_newest_first() {
    let ctx = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");
    let client = ctx.client();

    for title in ["first", "second", "third"] {
        client
            .post_json("/api/notes", &json!({ "title": title }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let notes: Vec<Value> = client.get("/api/notes").await.json();
    let titles: Vec<&str> = notes
        .iter()
        .map(|n| n["title"].as_str().expect("title"))
        .collect();
    assert_eq!(titles, ["third", "second", "first"]);
}

#[tokio::test]
async fn test_delete_unknown_note_is_ok() {
    let ctx = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let response = ctx.client().delete("/api/notes/999").await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_non_numeric_note_id_is_rejected() {
    let ctx = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let response = ctx.client().delete("/api/notes/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_a_server_error() {
    let ctx = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let response = ctx.client().post_raw("/api/notes", "{not json").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_note_without_title_is_a_store_error() {
    let ctx = TestStateBuilder::new()
        .build()
        .await
        .expect("Failed to create test state");

    let response = ctx
        .client()
        .post_json("/api/notes", &json!({ "content": "orphan" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
