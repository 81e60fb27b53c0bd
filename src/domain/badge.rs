/// Unlocked achievement records

use chrono::Utc;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A badge the user has unlocked
///
/// The store treats this as an opaque payload; badge definitions and the
/// record's shape belong to the caller. Whatever JSON was stored is kept
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct UserBadge(pub Value);

impl UserBadge {
    /// Mark `badge_id` as unlocked now
    pub fn unlock(badge_id: impl Into<String>) -> Self {
        Self(json!({
            "badgeId": badge_id.into(),
            "unlockedAt": Utc::now().to_rfc3339(),
        }))
    }

    /// The badge's id, from `badgeId` or `id`
    pub fn badge_id(&self) -> Option<&str> {
        self.0
            .get("badgeId")
            .or_else(|| self.0.get("id"))
            .and_then(Value::as_str)
    }
}
