/// Domain module containing core entities and validation rules
///
/// This module defines the core entities (Habit, DailyLog, WeekSchedule) and
/// their validation rules. These types represent the fundamental concepts in
/// the habit tracking system.

pub mod habit;
pub mod log;
pub mod schedule;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use log::*;
pub use schedule::*;
pub use types::*;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}

/// Parse a `yyyy-MM-dd` date string supplied by a caller
///
/// This is the only fallible parse in the system. The error names the
/// offending value so a bad date is never silently dropped from a
/// habit's history.
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(format!("not a yyyy-MM-dd date: '{}'", s)))
}
