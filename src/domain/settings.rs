/// Application settings singleton
///
/// Exactly one AppSettings record exists per storage namespace. When none is
/// stored the store hands back `AppSettings::default()` without writing it.

use chrono::Weekday;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::DomainError;

/// Colour scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the operating system
    #[default]
    System,
    Light,
    Dark,
}

/// Base font size for the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Layout used for the habit list on launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    #[default]
    Grid,
    List,
}

/// User-facing application preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub theme: Theme,
    /// CSS colour, e.g. "#3b82f6"
    pub accent_color: String,
    pub font_size: FontSize,
    pub notification_sound: bool,
    /// First day of the week, 0 = Sunday ... 6 = Saturday
    pub week_starts_on: u8,
    pub default_view: DefaultView,
    /// Fields written by the web client that this crate does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            accent_color: "#3b82f6".to_string(),
            font_size: FontSize::Medium,
            notification_sound: true,
            week_starts_on: 0,
            default_view: DefaultView::Grid,
            extra: Map::new(),
        }
    }
}

impl AppSettings {
    /// Check the fields a settings form could get wrong
    ///
    /// The store itself never calls this; stored settings are read as-is.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.week_starts_on > 6 {
            return Err(DomainError::InvalidSettings(format!(
                "weekStartsOn must be 0-6, got {}",
                self.week_starts_on
            )));
        }

        let hex = self.accent_color.strip_prefix('#').unwrap_or("");
        let valid_len = hex.len() == 3 || hex.len() == 6;
        if !valid_len || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidSettings(format!(
                "accentColor must be a hex colour like #3b82f6, got '{}'",
                self.accent_color
            )));
        }

        Ok(())
    }

    /// The configured first weekday
    pub fn week_start(&self) -> Weekday {
        match self.week_starts_on % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}
