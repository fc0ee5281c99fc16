//! notes-store: Storage layer for the notes service
//!
//! This crate provides:
//! - The [`NoteStore`] trait every consumer programs against
//! - A PostgreSQL implementation via sqlx ([`PgStore`])
//! - An in-memory implementation for development and tests ([`MemoryStore`])
//! - The embedded schema bootstrap
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{NoteStore, PgStore, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = PgStore::connect(config).await?;
//!
//! let notes = store.list().await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use models::NoteRow;
pub use repository::NoteStore;
pub use store::{DEFAULT_DATABASE_URL, PgStore, StoreConfig};

// Re-export notes-core for downstream crates
pub use notes_core;
