/// Typed store adapter over a storage medium
///
/// Every collection is read and written whole. Saves overwrite the canonical
/// key unconditionally; nothing is merged, and saves of different
/// collections are independent writes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{AppSettings, Category, Habit, HabitLog, UserBadge};
use crate::storage::legacy::{self, MigrationReport};
use crate::storage::{Collection, StorageError, StorageMedium, StoreConfig};

/// Every stored record kind at once
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub categories: Vec<Category>,
    pub habits: Vec<Habit>,
    pub logs: Vec<HabitLog>,
    pub badges: Vec<UserBadge>,
    /// `None` when no settings record has been saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<AppSettings>,
}

/// Persistent store for habit tracker data
pub struct HabitStore<M: StorageMedium> {
    medium: M,
    config: StoreConfig,
    migration: MigrationReport,
}

impl<M: StorageMedium> HabitStore<M> {
    /// Wrap a medium without touching legacy keys
    pub(crate) fn new(medium: M, config: StoreConfig) -> Self {
        Self {
            medium,
            config,
            migration: MigrationReport::default(),
        }
    }

    /// Wrap a medium and run the legacy-key migration once
    pub fn open(medium: M, config: StoreConfig) -> Result<Self, StorageError> {
        let mut store = Self::new(medium, config);
        store.migration = store.migrate_legacy_keys()?;
        Ok(store)
    }

    /// Copy legacy per-user keys into empty canonical keys
    ///
    /// `open` already does this for every collection; getters repeat it for
    /// their own collection when the canonical key is missing.
    pub fn migrate_legacy_keys(&self) -> Result<MigrationReport, StorageError> {
        legacy::migrate_legacy_keys(&self.medium, &self.config)
    }

    /// What the migration in `open` did
    pub fn migration_report(&self) -> &MigrationReport {
        &self.migration
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    pub fn get_categories(&self) -> Result<Vec<Category>, StorageError> {
        self.read_collection(Collection::Categories)
    }

    pub fn save_categories(&self, categories: &[Category]) -> Result<(), StorageError> {
        self.write(Collection::Categories, categories)
    }

    pub fn get_habits(&self) -> Result<Vec<Habit>, StorageError> {
        self.read_collection(Collection::Habits)
    }

    pub fn save_habits(&self, habits: &[Habit]) -> Result<(), StorageError> {
        self.write(Collection::Habits, habits)
    }

    pub fn get_logs(&self) -> Result<Vec<HabitLog>, StorageError> {
        self.read_collection(Collection::Logs)
    }

    pub fn save_logs(&self, logs: &[HabitLog]) -> Result<(), StorageError> {
        self.write(Collection::Logs, logs)
    }

    pub fn get_badges(&self) -> Result<Vec<UserBadge>, StorageError> {
        self.read_collection(Collection::Badges)
    }

    pub fn save_badges(&self, badges: &[UserBadge]) -> Result<(), StorageError> {
        self.write(Collection::Badges, badges)
    }

    /// Stored settings, or the default when none have been saved
    ///
    /// The default is not written back.
    pub fn get_settings(&self) -> Result<AppSettings, StorageError> {
        Ok(self.stored_settings()?.unwrap_or_default())
    }

    pub fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        self.write(Collection::Settings, settings)
    }

    /// Raw stored text of one canonical key
    pub fn raw(&self, collection: Collection) -> Result<Option<String>, StorageError> {
        self.medium.get_item(&self.config.canonical_key(collection))
    }

    /// Read every collection at once
    pub fn export(&self) -> Result<StoreSnapshot, StorageError> {
        Ok(StoreSnapshot {
            categories: self.get_categories()?,
            habits: self.get_habits()?,
            logs: self.get_logs()?,
            badges: self.get_badges()?,
            settings: self.stored_settings()?,
        })
    }

    /// Overwrite every collection from a snapshot
    ///
    /// Each collection is its own write; a failure part way through leaves
    /// the earlier ones saved. Settings are only written when present.
    pub fn import(&self, snapshot: &StoreSnapshot) -> Result<(), StorageError> {
        self.save_categories(&snapshot.categories)?;
        self.save_habits(&snapshot.habits)?;
        self.save_logs(&snapshot.logs)?;
        self.save_badges(&snapshot.badges)?;
        if let Some(settings) = &snapshot.settings {
            self.save_settings(settings)?;
        }
        Ok(())
    }

    /// Remove every canonical key; legacy keys are left alone
    pub fn clear(&self) -> Result<(), StorageError> {
        for collection in Collection::ALL {
            self.medium
                .remove_item(&self.config.canonical_key(collection))?;
        }
        debug!("Cleared namespace '{}'", self.config.namespace);
        Ok(())
    }

    fn stored_settings(&self) -> Result<Option<AppSettings>, StorageError> {
        match self.read_canonical(Collection::Settings)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    /// Canonical text, falling back to a legacy key written since `open`
    fn read_canonical(&self, collection: Collection) -> Result<Option<String>, StorageError> {
        if let Some(text) = self.raw(collection)? {
            return Ok(Some(text));
        }

        let keys = self.medium.keys()?;
        match legacy::migrate_collection(&self.medium, &self.config, &keys, collection)? {
            Some(_) => self.raw(collection),
            None => Ok(None),
        }
    }

    fn read_collection<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StorageError> {
        match self.read_canonical(collection)? {
            Some(text) => {
                let items: Vec<T> = serde_json::from_str(&text)?;
                debug!("Read {} {}", items.len(), collection);
                Ok(items)
            }
            None => Ok(Vec::new()),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, collection: Collection, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value)?;
        self.medium
            .set_item(&self.config.canonical_key(collection), &text)?;
        debug!("Saved {} ({} bytes)", collection, text.len());
        Ok(())
    }
}
