//! Note CRUD routes.
//!
//! This module implements the JSON API under `/api/notes`:
//! - GET /api/notes - List all notes, newest first
//! - GET /api/notes/{id} - Fetch one note
//! - POST /api/notes - Create a note
//! - PUT /api/notes/{id} - Replace some fields of a note
//! - DELETE /api/notes/{id} - Delete a note
//!
//! Handlers only validate input and translate store results; all rules
//! about what a valid note is live in notes-core.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use notes_core::{Note, NoteId, NewNoteInput, NotePatchInput, validate_new, validate_patch};

use crate::error::ApiResult;
use crate::extract::{ApiJson, NotePath};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response for DELETE /api/notes/{id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteNoteResponse {
    /// Confirmation message.
    pub message: String,
    /// ID of the deleted note.
    pub id: NoteId,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/notes - List all notes.
///
/// # Response
///
/// - 200 OK: array of notes, newest first by `createdAt`
/// - 500 Internal Server Error: store failure
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    let notes = state.store().list().await?;

    tracing::debug!(count = notes.len(), "Listed notes");

    Ok(Json(notes))
}

/// GET /api/notes/{id} - Fetch a single note.
///
/// # Response
///
/// - 200 OK: the note
/// - 404 Not Found: no note with this id
async fn get_note(
    State(state): State<AppState>,
    NotePath(id): NotePath,
) -> ApiResult<Json<Note>> {
    let note = state.store().get(id).await?;
    Ok(Json(note))
}

/// POST /api/notes - Create a note.
///
/// # Request
///
/// Body: `{ "title": "...", "content": "...", "category": "Work" }`
/// (`category` optional, defaults to `Others`)
///
/// # Response
///
/// - 201 Created: the stored note including `id`, `createdAt`, `updatedAt`
/// - 400 Bad Request: title or content missing, unknown category, bad JSON
async fn create_note(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewNoteInput>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let new_note = validate_new(input).into_result()?;

    let note = state.store().create(new_note).await?;

    tracing::info!(
        note_id = %note.id,
        category = %note.category,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /api/notes/{id} - Update a note.
///
/// Supplied fields replace the stored ones; absent fields are kept.
///
/// # Response
///
/// - 200 OK: the updated note
/// - 400 Bad Request: a supplied title/content is empty, or nothing supplied
/// - 404 Not Found: no note with this id
async fn update_note(
    State(state): State<AppState>,
    NotePath(id): NotePath,
    ApiJson(input): ApiJson<NotePatchInput>,
) -> ApiResult<Json<Note>> {
    let patch = validate_patch(input).into_result()?;

    let note = state.store().update(id, patch).await?;

    tracing::info!(note_id = %note.id, "Note updated");

    Ok(Json(note))
}

/// DELETE /api/notes/{id} - Delete a note permanently.
///
/// # Response
///
/// - 200 OK: `{ "message": "Note deleted", "id": "..." }`
/// - 404 Not Found: no note with this id
async fn delete_note(
    State(state): State<AppState>,
    NotePath(id): NotePath,
) -> ApiResult<Json<DeleteNoteResponse>> {
    state.store().delete(id).await?;

    tracing::info!(note_id = %id, "Note deleted");

    Ok(Json(DeleteNoteResponse {
        message: "Note deleted".to_string(),
        id,
    }))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================
