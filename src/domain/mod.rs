/// Domain module containing the stored record types and pure helpers
///
/// This module defines the entities the store persists (Category, Habit,
/// HabitLog, UserBadge, AppSettings) plus the id and date utilities that
/// callers use to build them.

pub mod badge;
pub mod category;
pub mod dates;
pub mod entry;
pub mod habit;
pub mod ids;
pub mod settings;
pub mod types;

// Re-export public types for easy access
pub use badge::*;
pub use category::*;
pub use dates::*;
pub use entry::*;
pub use habit::*;
pub use ids::*;
pub use settings::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}
