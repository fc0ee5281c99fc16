//! In-process note store.
//!
//! Used by `STORE_BACKEND=memory` and by tests. Contents are lost when the
//! process exits.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use notes_core::{NewNote, Note, NoteId, NotePatch};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::repository::NoteStore;

#[derive(Debug, Default)]
struct Inner {
    /// Notes keyed by insertion sequence.
    notes: BTreeMap<u64, Note>,
    /// Note id to insertion sequence.
    index: HashMap<NoteId, u64>,
    next_seq: u64,
}

/// Note store backed by a map behind a `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.inner.read().await.notes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Note>> {
        let inner = self.inner.read().await;
        // Reverse insertion order, then a stable sort keeps later inserts
        // first among equal creation times.
        let mut notes: Vec<Note> = inner.notes.values().rev().cloned().collect();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notes)
    }

    async fn get(&self, id: NoteId) -> StoreResult<Note> {
        let inner = self.inner.read().await;
        inner
            .index
            .get(&id)
            .and_then(|seq| inner.notes.get(seq))
            .cloned()
            .ok_or(StoreError::NoteNotFound(id))
    }

    async fn create(&self, note: NewNote) -> StoreResult<Note> {
        let mut inner = self.inner.write().await;

        let mut id = NoteId::new();
        while inner.index.contains_key(&id) {
            id = NoteId::new();
        }

        let note = note.into_note(id, Utc::now());
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.index.insert(id, seq);
        inner.notes.insert(seq, note.clone());

        Ok(note)
    }

    async fn update(&self, id: NoteId, patch: NotePatch) -> StoreResult<Note> {
        let mut inner = self.inner.write().await;
        let seq = *inner.index.get(&id).ok_or(StoreError::NoteNotFound(id))?;
        let note = inner
            .notes
            .get_mut(&seq)
            .ok_or(StoreError::NoteNotFound(id))?;

        patch.apply(note, Utc::now());
        Ok(note.clone())
    }

    async fn delete(&self, id: NoteId) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let seq = inner.index.remove(&id).ok_or(StoreError::NoteNotFound(id))?;
        inner.notes.remove(&seq);
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
