/// Migration of per-user legacy keys
///
/// Older clients stored each collection under `<namespace>-<userId>-<suffix>`.
/// For every collection whose canonical key is empty, the first legacy key in
/// the medium's enumeration order is copied verbatim into the canonical key.
/// Legacy keys are left in place.

use serde::Serialize;
use tracing::{debug, info};

use crate::storage::{Collection, StorageError, StorageMedium, StoreConfig};

/// One legacy key that was copied into its canonical key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigratedKey {
    pub collection: Collection,
    pub legacy_key: String,
    pub canonical_key: String,
}

/// Result of a migration pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub migrated: Vec<MigratedKey>,
}

impl MigrationReport {
    pub fn is_empty(&self) -> bool {
        self.migrated.is_empty()
    }

    /// The legacy key used for `collection`, if one was migrated
    pub fn source_for(&self, collection: Collection) -> Option<&str> {
        self.migrated
            .iter()
            .find(|m| m.collection == collection)
            .map(|m| m.legacy_key.as_str())
    }
}

/// First key matching the legacy pattern for `collection`
///
/// When several match, enumeration order decides.
pub fn find_legacy_key(keys: &[String], config: &StoreConfig, collection: Collection) -> Option<String> {
    keys.iter()
        .find(|key| config.is_legacy_key(collection, key))
        .cloned()
}

/// Copy the first legacy value for `collection` into its empty canonical key
///
/// `keys` is the medium's enumeration. Returns `None` when the canonical key
/// is already set or no legacy key exists.
pub fn migrate_collection<M: StorageMedium>(
    medium: &M,
    config: &StoreConfig,
    keys: &[String],
    collection: Collection,
) -> Result<Option<MigratedKey>, StorageError> {
    let canonical_key = config.canonical_key(collection);
    if medium.get_item(&canonical_key)?.is_some() {
        return Ok(None);
    }

    let Some(legacy_key) = find_legacy_key(keys, config, collection) else {
        debug!("No legacy key for {}", collection);
        return Ok(None);
    };

    let Some(value) = medium.get_item(&legacy_key)? else {
        return Ok(None);
    };

    medium.set_item(&canonical_key, &value)?;
    info!("Migrated legacy key '{}' into '{}'", legacy_key, canonical_key);

    Ok(Some(MigratedKey {
        collection,
        legacy_key,
        canonical_key,
    }))
}

/// Copy legacy values into every empty canonical key
pub fn migrate_legacy_keys<M: StorageMedium>(
    medium: &M,
    config: &StoreConfig,
) -> Result<MigrationReport, StorageError> {
    let keys = medium.keys()?;
    let mut report = MigrationReport::default();

    for collection in Collection::ALL {
        if let Some(migrated) = migrate_collection(medium, config, &keys, collection)? {
            report.migrated.push(migrated);
        }
    }

    Ok(report)
}
