//! The store interface the rest of the service programs against.
//!
//! Handlers and the HTML page hold an `Arc<dyn NoteStore>` and never see
//! which engine sits behind it.

use async_trait::async_trait;
use notes_core::{NewNote, Note, NoteId, NotePatch};

use crate::error::StoreResult;

/// Persistent collection of notes keyed by id.
///
/// Every operation touches at most one record, and each write is atomic
/// on its own. Inputs arrive already validated.
#[async_trait]
pub trait NoteStore: Send + Sync + 'static {
    /// All notes, newest first by creation time.
    async fn list(&self) -> StoreResult<Vec<Note>>;

    /// A single note, or `StoreError::NoteNotFound`.
    async fn get(&self, id: NoteId) -> StoreResult<Note>;

    /// Insert a note, assigning its id and both timestamps.
    async fn create(&self, note: NewNote) -> StoreResult<Note>;

    /// Replace the supplied fields and bump `updated_at`.
    async fn update(&self, id: NoteId, patch: NotePatch) -> StoreResult<Note>;

    /// Remove a note permanently.
    async fn delete(&self, id: NoteId) -> StoreResult<()>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
