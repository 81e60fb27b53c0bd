/// Public library interface for the habit tracker store
///
/// This crate persists the habit tracker's collections (categories, habits,
/// logs, badges, settings) in a key-value storage medium, migrates data left
/// under old per-user keys, and provides the date and id helpers callers
/// use to build records.

use std::path::Path;
use thiserror::Error;

// Internal modules
mod domain;
pub mod auth;
pub mod diagnostics;
pub mod storage;

// Re-export public modules and types
pub use domain::*;
pub use storage::{
    Collection, HabitStore, MemoryMedium, MigrationReport, SqliteMedium, StorageError,
    StorageMedium, StoreConfig, StoreSnapshot,
};

/// Errors surfaced to the application layer
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("Authentication error: {0}")]
    Auth(#[from] auth::AuthError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Open a SQLite-backed store at `db_path`
///
/// This creates the database if needed and runs the legacy-key migration
/// once before returning.
pub fn open_store(db_path: &Path, config: StoreConfig) -> Result<HabitStore<SqliteMedium>, AppError> {
    tracing::info!("Opening habit store at {:?} (namespace '{}')", db_path, config.namespace);

    let medium = SqliteMedium::new(db_path)?;
    let store = HabitStore::open(medium, config)?;

    let report = store.migration_report();
    if !report.is_empty() {
        tracing::info!("Migrated {} legacy collections", report.migrated.len());
    }

    Ok(store)
}
