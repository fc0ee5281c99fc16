//! notes-core: shared types for the notes service.
//!
//! This crate provides:
//! - The [`Note`] model and its identifier and category types
//! - Validation of raw input into store-ready values
//! - Local search and category filtering
//!
//! Both the server and the client depend on it, so the same validation and
//! filtering rules apply on either side of the wire.

pub mod filter;
pub mod types;
pub mod validation;

pub use filter::{CategoryFilter, NoteFilter};
pub use types::{Category, NewNote, Note, NoteId, NotePatch, UnknownCategory};
pub use validation::{
    NewNoteInput, NotePatchInput, REQUIRED_FIELDS_MESSAGE, Validated, ValidationError,
    validate_new, validate_patch,
};
