//! Schema definition and bootstrap.
//!
//! The DDL is embedded at compile time and written so it can be applied
//! on every start.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded SQL for the notes table (001_notes.sql).
pub const NOTES_SCHEMA: &str = include_str!("../../../migrations/001_notes.sql");

/// Apply the notes schema. Idempotent.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running notes schema (001_notes.sql)...");
    sqlx::raw_sql(NOTES_SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Notes schema failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `notes` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'notes'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
