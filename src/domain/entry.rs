/// HabitLog entity for tracking habit check-ins
///
/// A HabitLog is one completion record for a habit on a given day. The day is
/// stored as a canonical `YYYY-MM-DD` string.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{format_date, parse_date, DomainError, HabitId, LogId};

/// A record of checking in a habit on a specific day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HabitLog {
    pub id: LogId,
    /// Which habit this log is for
    pub habit_id: HabitId,
    /// Day of the check-in, `YYYY-MM-DD`
    pub date: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// When the check-in was recorded (can be a later day than `date`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Fields written by the web client that this crate does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HabitLog {
    /// Record a completion of `habit_id` on `date`
    pub fn completed(habit_id: HabitId, date: NaiveDate, note: Option<String>) -> Result<Self, DomainError> {
        Self::validate_note(&note)?;

        Ok(Self {
            id: LogId::new(),
            habit_id,
            date: format_date(date),
            completed: true,
            note,
            completed_at: Some(Utc::now()),
            extra: Map::new(),
        })
    }

    /// The log's day as a date
    pub fn day(&self) -> Result<NaiveDate, DomainError> {
        parse_date(&self.date)
    }

    /// Check if this log has a non-blank note
    pub fn has_note(&self) -> bool {
        self.note.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    fn validate_note(note: &Option<String>) -> Result<(), DomainError> {
        if let Some(text) = note {
            if text.len() > 500 {
                return Err(DomainError::Validation {
                    message: "Notes cannot be longer than 500 characters".to_string(),
                });
            }
        }
        Ok(())
    }
}
