//! HTTP API integration tests.
//!
//! Drives the full application (routes plus middleware) in-process with
//! `tower::ServiceExt::oneshot`, backed by a `MemoryStore`.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use notes_core::{NewNote, Note, NoteId, NotePatch};
use notes_server::{AppState, ServerConfig, build_app};
use notes_store::{MemoryStore, NoteStore, StoreError, StoreResult};

// ============================================================================
// Helpers
// ============================================================================

fn app_with(store: Arc<dyn NoteStore>) -> Router {
    let state = AppState::new(store, ServerConfig::default());
    build_app(state).expect("default config builds")
}

fn app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (app_with(store.clone()), store)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create(app: &Router, title: &str, content: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/notes",
        Some(json!({ "title": title, "content": content })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

/// Store whose every operation fails.
struct BrokenStore;

#[async_trait]
impl NoteStore for BrokenStore {
    async fn list(&self) -> StoreResult<Vec<Note>> {
        Err(StoreError::MigrationError("disk on fire".to_string()))
    }
    async fn get(&self, _id: NoteId) -> StoreResult<Note> {
        Err(StoreError::MigrationError("disk on fire".to_string()))
    }
    async fn create(&self, _note: NewNote) -> StoreResult<Note> {
        Err(StoreError::MigrationError("disk on fire".to_string()))
    }
    async fn update(&self, _id: NoteId, _patch: NotePatch) -> StoreResult<Note> {
        Err(StoreError::MigrationError("disk on fire".to_string()))
    }
    async fn delete(&self, _id: NoteId) -> StoreResult<()> {
        Err(StoreError::MigrationError("disk on fire".to_string()))
    }
    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::MigrationError("disk on fire".to_string()))
    }
    fn backend(&self) -> &'static str {
        "broken"
    }
}

/// Store that panics when listing.
struct PanickingStore;

#[async_trait]
impl NoteStore for PanickingStore {
    async fn list(&self) -> StoreResult<Vec<Note>> {
        panic!("list exploded")
    }
    async fn get(&self, id: NoteId) -> StoreResult<Note> {
        Err(StoreError::NoteNotFound(id))
    }
    async fn create(&self, _note: NewNote) -> StoreResult<Note> {
        Err(StoreError::ConfigError("read only".to_string()))
    }
    async fn update(&self, id: NoteId, _patch: NotePatch) -> StoreResult<Note> {
        Err(StoreError::NoteNotFound(id))
    }
    async fn delete(&self, id: NoteId) -> StoreResult<()> {
        Err(StoreError::NoteNotFound(id))
    }
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
    fn backend(&self) -> &'static str {
        "panicking"
    }
}

// ============================================================================
// CRUD contract
// ============================================================================

#[tokio::test]
async fn full_note_lifecycle() {
    let (app, _) = app();

    let created = create(&app, "A", "B").await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["title"], "A");
    assert_eq!(created["content"], "B");
    assert_eq!(created["category"], "Others");
    assert!(created["createdAt"].is_string());
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let (status, fetched) = send(&app, "GET", &format!("/api/notes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/notes/{id}"),
        Some(json!({ "title": "C" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "C");
    assert_eq!(updated["content"], "B");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let before: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(created["updatedAt"].clone()).unwrap();
    let after: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(updated["updatedAt"].clone()).unwrap();
    assert!(after > before);

    let (status, deleted) = send(&app, "DELETE", &format!("/api/notes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Note deleted");

    let (status, body) = send(&app, "GET", &format!("/api/notes/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Note not found");
}

#[tokio::test]
async fn create_with_category() {
    let (app, _) = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/notes",
        Some(json!({ "title": "Plan", "content": "Q3", "category": "Work" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["category"], "Work");
}

#[tokio::test]
async fn create_rejects_missing_fields_and_persists_nothing() {
    let (app, store) = app();

    for body in [
        json!({ "title": "", "content": "B" }),
        json!({ "title": "A", "content": "" }),
        json!({ "title": "A" }),
        json!({}),
    ] {
        let (status, response) = send(&app, "POST", "/api/notes", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["message"], "Title and content are required");
    }

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_rejects_unknown_category() {
    let (app, store) = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/notes",
        Some(json!({ "title": "A", "content": "B", "category": "Chores" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_rejects_malformed_json() {
    let (app, _) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/notes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_missing_note_is_404_and_store_unchanged() {
    let (app, store) = app();
    create(&app, "A", "B").await;
    let before = store.list().await.unwrap();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/notes/{}", NoteId::new()),
        Some(json!({ "title": "C", "content": "D" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(store.list().await.unwrap(), before);
}

#[tokio::test]
async fn update_rejects_empty_fields() {
    let (app, _) = app();
    let created = create(&app, "A", "B").await;
    let uri = format!("/api/notes/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, "PUT", &uri, Some(json!({ "title": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "PUT", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn delete_missing_note_is_404() {
    let (app, _) = app();
    let (status, _) = send(&app, "DELETE", &format!("/api/notes/{}", NoteId::new()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_uuid_id_is_404() {
    let (app, _) = app();
    let (status, body) = send(&app, "GET", "/api/notes/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Note not found");
}

#[tokio::test]
async fn list_is_newest_first() {
    let (app, _) = app();
    let first = create(&app, "1", "x").await;
    let second = create(&app, "2", "x").await;
    let third = create(&app, "3", "x").await;

    let (status, body) = send(&app, "GET", "/api/notes", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&Value> = body.as_array().unwrap().iter().map(|n| &n["id"]).collect();
    assert_eq!(ids, vec![&third["id"], &second["id"], &first["id"]]);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn store_failure_is_generic_500() {
    let app = app_with(Arc::new(BrokenStore));

    let (status, body) = send(&app, "GET", "/api/notes", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Server error");
    assert!(!body.to_string().contains("disk on fire"));

    let (status, _) = send(
        &app,
        "POST",
        "/api/notes",
        Some(json!({ "title": "A", "content": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn panic_is_caught_as_500() {
    let app = app_with(Arc::new(PanickingStore));

    let (status, body) = send(&app, "GET", "/api/notes", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Something went wrong");
}

#[tokio::test]
async fn health_reports_store_state() {
    let (app, _) = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let broken = app_with(Arc::new(BrokenStore));
    let (status, body) = send(&broken, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn unknown_route_is_404_json() {
    let (app, _) = app();
    let (status, body) = send(&app, "GET", "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn request_id_is_echoed() {
    let (app, _) = app();
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

// ============================================================================
// HTML page
// ============================================================================

async fn send_form(app: &Router, uri: &str, form: &str) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn page_add_and_delete() {
    let (app, store) = app();

    let response = send_form(&app, "/add", "title=Milk&content=Buy+milk&category=Personal").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let notes = store.list().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "Buy milk");

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(page.to_vec()).unwrap();
    assert!(page.contains("<strong>Milk</strong>"));

    let response = send_form(&app, &format!("/delete/{}", notes[0].id), "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn page_add_rejects_blank_title() {
    let (app, store) = app();
    let response = send_form(&app, "/add", "title=&content=x").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn page_add_rejects_non_form_body_with_html() {
    let (app, store) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title":"A","content":"B"}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let page = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(page.to_vec()).unwrap();
    assert!(page.contains("<h1>415</h1>"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn page_can_be_disabled() {
    let config = ServerConfig {
        html_page_enabled: false,
        ..ServerConfig::default()
    };
    let app = build_app(AppState::new(Arc::new(MemoryStore::new()), config)).unwrap();

    let (status, _) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
