/// Habit entity and related functionality
///
/// This module defines the Habit struct that represents something the user
/// wants to do regularly, along with its scheduling rules and validation.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{parse_time, CategoryId, DomainError, HabitId};

/// How often a habit should be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every single day
    #[default]
    Daily,
    /// On the weekdays listed in `target_days`, or any day if none are listed
    Weekly,
    /// Only on the weekdays listed in `target_days`
    Custom,
}

/// A habit represents something the user wants to do regularly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Soft reference to a Category, never checked by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub frequency: Frequency,
    /// Weekdays the habit is due on, 0 = Sunday ... 6 = Saturday
    #[serde(default)]
    pub target_days: Vec<u8>,
    /// Reminder time as "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Archived habits are kept for history but hidden from the day view
    #[serde(default)]
    pub archived: bool,
    /// Fields written by the web client that this crate does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Habit {
    /// Create a new daily habit with validation
    pub fn new(
        name: String,
        description: Option<String>,
        category_id: Option<CategoryId>,
        color: String,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_description(&description)?;

        Ok(Self {
            id: HabitId::new(),
            name,
            description,
            category_id,
            color,
            icon: None,
            frequency: Frequency::Daily,
            target_days: Vec::new(),
            reminder_time: None,
            created_at: Utc::now(),
            archived: false,
            extra: Map::new(),
        })
    }

    /// Switch the habit to a weekday schedule
    pub fn with_schedule(mut self, frequency: Frequency, target_days: Vec<u8>) -> Result<Self, DomainError> {
        if let Some(day) = target_days.iter().find(|d| **d > 6) {
            return Err(DomainError::Validation {
                message: format!("Target days must be 0-6, got {}", day),
            });
        }
        if frequency == Frequency::Custom && target_days.is_empty() {
            return Err(DomainError::Validation {
                message: "Custom frequency must specify at least one day".to_string(),
            });
        }

        self.frequency = frequency;
        self.target_days = target_days;
        Ok(self)
    }

    /// Check if this habit is due on a given date
    pub fn is_scheduled_for_date(&self, date: NaiveDate) -> bool {
        let weekday = date.weekday().num_days_from_sunday() as u8;
        match self.frequency {
            Frequency::Daily => true,
            Frequency::Weekly if self.target_days.is_empty() => true,
            Frequency::Weekly | Frequency::Custom => self.target_days.contains(&weekday),
        }
    }

    /// Reminder hour and minute, if a reminder is set
    pub fn reminder(&self) -> Option<(Option<u32>, Option<u32>)> {
        self.reminder_time.as_deref().map(parse_time)
    }

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_description(description: &Option<String>) -> Result<(), DomainError> {
        if let Some(desc) = description {
            if desc.len() > 500 {
                return Err(DomainError::Validation {
                    message: "Description cannot be longer than 500 characters".to_string(),
                });
            }
        }
        Ok(())
    }
}
