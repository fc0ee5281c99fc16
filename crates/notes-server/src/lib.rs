//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - REST endpoints under `/api/notes` (list, get, create, update, delete)
//! - A server-rendered HTML page over the same store
//! - Health checking
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - Panic recovery into JSON error responses
//!
//! Handlers are stateless; the only shared state is the `NoteStore` handle
//! and the configuration.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notes_server::{build_app, AppState, ServerConfig};
//! use notes_store::MemoryStore;
//!
//! let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::from_env()?);
//! let app = build_app(state)?;
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use app::build_app;
pub use config::{ConfigError, ServerConfig, StoreBackend};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
