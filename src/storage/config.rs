/// Key-name mapping for the store
///
/// A `StoreConfig` is built once per session and handed to `HabitStore`; it
/// owns the namespace every canonical and legacy key is derived from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Namespace the web client has always used
pub const DEFAULT_NAMESPACE: &str = "habit-tracker";

/// The five record kinds the store persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Categories,
    Habits,
    Logs,
    Badges,
    Settings,
}

impl Collection {
    /// Every collection, in migration order
    pub const ALL: [Collection; 5] = [
        Collection::Categories,
        Collection::Habits,
        Collection::Logs,
        Collection::Badges,
        Collection::Settings,
    ];

    /// Key suffix for this collection
    pub fn suffix(&self) -> &'static str {
        match self {
            Collection::Categories => "categories",
            Collection::Habits => "habits",
            Collection::Logs => "logs",
            Collection::Badges => "badges",
            Collection::Settings => "settings",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown collection '{0}' (expected categories, habits, logs, badges or settings)")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.suffix().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Prefix of every key, e.g. "habit-tracker"
    pub namespace: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// The key a collection lives under, e.g. "habit-tracker-habits"
    pub fn canonical_key(&self, collection: Collection) -> String {
        format!("{}-{}", self.namespace, collection.suffix())
    }

    /// Whether `key` has the old per-user shape `<namespace>-<anything>-<suffix>`
    pub fn is_legacy_key(&self, collection: Collection, key: &str) -> bool {
        let prefix = format!("{}-", self.namespace);
        let suffix = format!("-{}", collection.suffix());

        key.len() >= prefix.len() + suffix.len()
            && key.starts_with(&prefix)
            && key.ends_with(&suffix)
    }
}
