//! Input validation shared by every write path.
//!
//! Raw input arrives as optional strings (JSON bodies, HTML forms, the CLI
//! draft form). These functions are the only way to obtain a [`NewNote`] or a
//! [`NotePatch`], so the store never sees an empty title or content.

use serde::Deserialize;

use crate::types::{Category, NewNote, NotePatch, UnknownCategory};

/// Message used whenever a required text field is missing or blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and content are required";

/// Why a note input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Title or content missing, or whitespace only.
    #[error("{}", REQUIRED_FIELDS_MESSAGE)]
    MissingRequired,

    /// Category label outside the fixed set.
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    /// An update that changes nothing.
    #[error("At least one of title, content or category must be provided")]
    EmptyPatch,
}

/// Outcome of validating raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated<T> {
    Ok(T),
    Invalid(ValidationError),
}

impl<T> Validated<T> {
    /// Convert into a `Result` for `?` propagation.
    pub fn into_result(self) -> Result<T, ValidationError> {
        match self {
            Validated::Ok(value) => Ok(value),
            Validated::Invalid(err) => Err(err),
        }
    }
}

/// Raw fields for creating a note.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewNoteInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Raw fields for updating a note. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotePatchInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Absent or empty labels fall back to the default category.
fn parse_category(raw: Option<&str>) -> Result<Category, ValidationError> {
    match raw {
        None => Ok(Category::default()),
        Some(label) if is_blank(label) => Ok(Category::default()),
        Some(label) => Ok(label.parse()?),
    }
}

/// Validate input for a new note.
pub fn validate_new(input: NewNoteInput) -> Validated<NewNote> {
    let (Some(title), Some(content)) = (input.title, input.content) else {
        return Validated::Invalid(ValidationError::MissingRequired);
    };
    if is_blank(&title) || is_blank(&content) {
        return Validated::Invalid(ValidationError::MissingRequired);
    }

    match parse_category(input.category.as_deref()) {
        Ok(category) => Validated::Ok(NewNote {
            title,
            content,
            category,
        }),
        Err(e) => Validated::Invalid(e),
    }
}

/// Validate a partial update.
pub fn validate_patch(input: NotePatchInput) -> Validated<NotePatch> {
    if input.title.is_none() && input.content.is_none() && input.category.is_none() {
        return Validated::Invalid(ValidationError::EmptyPatch);
    }

    let supplied_blank = |field: &Option<String>| field.as_deref().is_some_and(is_blank);
    if supplied_blank(&input.title) || supplied_blank(&input.content) {
        return Validated::Invalid(ValidationError::MissingRequired);
    }

    let category = match input.category.as_deref() {
        None => None,
        raw => match parse_category(raw) {
            Ok(c) => Some(c),
            Err(e) => return Validated::Invalid(e),
        },
    };

    Validated::Ok(NotePatch {
        title: input.title,
        content: input.content,
        category,
    })
}
