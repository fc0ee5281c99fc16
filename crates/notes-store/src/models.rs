//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They are kept separate from the domain types in notes-core.

use chrono::{DateTime, Utc};
use notes_core::{Category, Note, NoteId};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::StoreError;

/// Columns selected for every note query, in `NoteRow` order.
pub(crate) const NOTE_COLUMNS: &str = "id, title, content, category, created_at, updated_at";

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<NoteRow> for Note {
    type Error = StoreError;

    fn try_from(row: NoteRow) -> Result<Self, Self::Error> {
        let id = NoteId::from_uuid(row.id);
        let category: Category = row.category.parse().map_err(|e: notes_core::UnknownCategory| {
            StoreError::Corrupt {
                id,
                reason: e.to_string(),
            }
        })?;

        Ok(Note {
            id,
            title: row.title,
            content: row.content,
            category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
