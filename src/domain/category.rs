/// Category entity for grouping habits

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{CategoryId, DomainError};

/// A named group of habits ("Health", "Work", ...)
///
/// Habits point at categories by id; nothing checks that the id exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display colour, e.g. "#22c55e"
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Fields written by the web client that this crate does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Category {
    /// Create a new category with a fresh id
    pub fn new(name: String, color: String, icon: Option<String>) -> Result<Self, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidName(
                "Category name cannot be empty".to_string(),
            ));
        }
        if trimmed.len() > 50 {
            return Err(DomainError::InvalidName(
                "Category name cannot be longer than 50 characters".to_string(),
            ));
        }

        Ok(Self {
            id: CategoryId::new(),
            name: trimmed.to_string(),
            color,
            icon,
            created_at: Utc::now(),
            extra: Map::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category() {
        let category = Category::new("  Health ".to_string(), "#22c55e".to_string(), None).unwrap();
        assert_eq!(category.name, "Health");
        assert!(category.icon.is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Category::new("   ".to_string(), "#000".to_string(), None).is_err());
    }

    #[test]
    fn test_missing_icon_deserializes() {
        let json = r##"{"id":"c1","name":"Work","color":"#000","createdAt":"2024-01-05T10:00:00.000Z"}"##;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id.as_str(), "c1");
        assert_eq!(category.icon, None);
    }
}
