/// SQLite implementation of the storage medium
///
/// This module provides a durable `StorageMedium` for the command line tool.
/// Each key is one row of the `kv_items` table.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::storage::{migrations, StorageError, StorageMedium};

/// SQLite-backed key-value medium
pub struct SqliteMedium {
    conn: Connection,
}

impl SqliteMedium {
    /// Open (or create) the database file and bring its schema up to date
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Medium(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite medium initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// A throwaway medium that lives only as long as the value
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Medium(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }
}

impl StorageMedium for SqliteMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_items WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv_items (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        tracing::debug!("Wrote {} bytes to '{}'", value.len(), key);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv_items WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv_items ORDER BY rowid")?;
        let key_iter = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut keys = Vec::new();
        for key in key_iter {
            keys.push(key?);
        }

        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let medium = SqliteMedium::open_in_memory().unwrap();
        assert_eq!(medium.get_item("k").unwrap(), None);

        medium.set_item("k", "v1").unwrap();
        medium.set_item("k", "v2").unwrap();
        assert_eq!(medium.get_item("k").unwrap().as_deref(), Some("v2"));

        medium.remove_item("k").unwrap();
        assert_eq!(medium.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_keys_keep_first_insert_order() {
        let medium = SqliteMedium::open_in_memory().unwrap();
        medium.set_item("b", "1").unwrap();
        medium.set_item("a", "2").unwrap();
        medium.set_item("b", "3").unwrap();

        assert_eq!(medium.keys().unwrap(), vec!["b", "a"]);
    }
}
