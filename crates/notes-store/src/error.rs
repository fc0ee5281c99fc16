//! Error types for the storage layer.

use notes_core::NoteId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),

    /// A stored row could not be mapped back to a note.
    #[error("corrupt note row {id}: {reason}")]
    Corrupt { id: NoteId, reason: String },

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl StoreError {
    /// Whether this error means the requested note does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NoteNotFound(_))
    }
}
