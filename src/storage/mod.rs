/// Storage layer for persisting habit data
///
/// Everything is kept in a synchronous key-value storage medium, one
/// serialized collection per key. `HabitStore` is the typed adapter on top;
/// the media (`MemoryMedium`, `SqliteMedium`) only move strings around.

pub mod config;
pub mod legacy;
pub mod memory;
pub mod migrations;
pub mod sqlite;
pub mod store;

// Re-export the main storage types
pub use config::{Collection, StoreConfig, UnknownCollection};
pub use legacy::{MigratedKey, MigrationReport};
pub use memory::MemoryMedium;
pub use sqlite::SqliteMedium;
pub use store::{HabitStore, StoreSnapshot};

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage medium error: {0}")]
    Medium(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Quota exceeded writing '{key}': {needed} bytes needed, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining a synchronous key-value storage medium
///
/// Receivers are `&self`; implementations use interior mutability the way a
/// database connection does. `keys` must enumerate in a stable order for
/// the medium, since legacy-key migration picks the first match.
pub trait StorageMedium {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// All keys, in the medium's enumeration order
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
