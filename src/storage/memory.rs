/// In-memory storage medium
///
/// Keys keep insertion order, so legacy-key scans are deterministic. An
/// optional byte quota mimics the browser's storage limit.

use std::cell::RefCell;

use crate::storage::{StorageError, StorageMedium};

#[derive(Debug, Default)]
pub struct MemoryMedium {
    items: RefCell<Vec<(String, String)>>,
    /// Maximum total bytes of keys plus values
    quota: Option<usize>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// A medium that refuses writes once `limit` bytes would be exceeded
    pub fn with_quota(limit: usize) -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            quota: Some(limit),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Bytes currently used by keys and values
    pub fn used_bytes(&self) -> usize {
        self.items
            .borrow()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageMedium for MemoryMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .items
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.borrow_mut();
        let position = items.iter().position(|(k, _)| k == key);

        if let Some(limit) = self.quota {
            let current: usize = items.iter().map(|(k, v)| k.len() + v.len()).sum();
            let replaced = position.map_or(0, |i| items[i].0.len() + items[i].1.len());
            let needed = current - replaced + key.len() + value.len();
            if needed > limit {
                tracing::warn!("Refusing write to '{}': {} of {} bytes", key, needed, limit);
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        match position {
            Some(i) => items[i].1 = value.to_string(),
            None => items.push((key.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().retain(|(k, _)| k != key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.items.borrow().iter().map(|(k, _)| k.clone()).collect())
    }
}
