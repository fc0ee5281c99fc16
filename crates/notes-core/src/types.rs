//! Core data types for the notes service.
//!
//! A note is the only entity in the system:
//!
//! - An opaque identifier assigned by the store
//! - A non-empty title and content
//! - A category tag from a fixed set
//! - Creation and last-update timestamps maintained by the store
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization. The wire form uses camelCase
//! field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Wraps a UUID v4. Identifiers are generated by the store on creation and
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NoteId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Category
// ============================================================================

/// Fixed set of labels a note can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    Ideas,
    #[default]
    Others,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Ideas,
        Category::Others,
    ];

    /// Canonical label, as stored and serialized.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Ideas => "Ideas",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label is not one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of Work, Personal, Ideas, Others)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parses a label case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// Note
// ============================================================================

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a note about to be created.
///
/// Only obtainable through [`crate::validation::validate_new`], so a value of
/// this type always carries a non-empty title and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) category: Category,
}

impl NewNote {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Materialize the note with store-assigned identity and timestamp.
    #[must_use]
    pub fn into_note(self, id: NoteId, now: DateTime<Utc>) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            category: self.category,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Replacement fields for an existing note. `None` leaves a field untouched.
///
/// Only obtainable through [`crate::validation::validate_patch`]; at least
/// one field is always set and every set text field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePatch {
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
    pub(crate) category: Option<Category>,
}

impl NotePatch {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Apply the patch to `note`, stamping `updated_at`.
    ///
    /// `now` is clamped so `updated_at` strictly increases even when the
    /// clock has not advanced since the previous write.
    pub fn apply(&self, note: &mut Note, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            note.title.clone_from(title);
        }
        if let Some(content) = &self.content {
            note.content.clone_from(content);
        }
        if let Some(category) = self.category {
            note.category = category;
        }
        note.updated_at = next_update_stamp(note.updated_at, now);
    }
}

/// Smallest timestamp that is both `>= now` and strictly after `previous`.
#[must_use]
pub fn next_update_stamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous + chrono::Duration::microseconds(1);
    if now < floor { floor } else { now }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_id_display_fromstr() {
        let id = NoteId::new();
        let parsed: NoteId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn note_id_serializes_as_plain_string() {
        let id = NoteId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("work".parse::<Category>().unwrap(), Category::Work);
        assert_eq!(" IDEAS ".parse::<Category>().unwrap(), Category::Ideas);
        assert!("Chores".parse::<Category>().is_err());
    }

    #[test]
    fn category_defaults_to_others() {
        assert_eq!(Category::default(), Category::Others);
    }

    #[test]
    fn note_uses_camel_case_fields() {
        let now = Utc::now();
        let note = Note {
            id: NoteId::new(),
            title: "A".to_string(),
            content: "B".to_string(),
            category: Category::Personal,
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&note).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["category"], "Personal");
    }

    #[test]
    fn update_stamp_is_strictly_increasing() {
        let t = Utc::now();
        assert!(next_update_stamp(t, t) > t);
        assert!(next_update_stamp(t, t - chrono::Duration::seconds(5)) > t);

        let later = t + chrono::Duration::seconds(5);
        assert_eq!(next_update_stamp(t, later), later);
    }
}
