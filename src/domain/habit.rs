/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// activity the user wants to track, along with its validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, DomainError, HabitId, WeekSchedule};

/// A habit represents something the user wants to do on a weekly schedule
///
/// This is the core entity in the system. Each habit has a name, an emoji
/// for the grid display, a category, and a WeekSchedule describing which
/// weekdays it is expected on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read 20 pages")
    pub name: String,
    /// Emoji shown in the habit grid
    pub emoji: String,
    /// Category for organization and coloring
    pub category: Category,
    /// Which weekdays this habit is active on
    pub week_schedule: WeekSchedule,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
    /// Position in the user's manual ordering
    pub order_position: i32,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The id is a placeholder until the storage layer assigns a row id
    /// on insert. An empty emoji falls back to the category default.
    pub fn new(
        name: String,
        emoji: String,
        category: Category,
        week_schedule: WeekSchedule,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_emoji(&emoji)?;

        let emoji = if emoji.trim().is_empty() {
            category.emoji().to_string()
        } else {
            emoji
        };

        Ok(Self {
            id: HabitId(0),
            name,
            emoji,
            category,
            week_schedule,
            created_at: Utc::now(),
            order_position: 0,
        })
    }

    /// Create a habit from existing data (used when loading from storage)
    ///
    /// This constructor assumes data is already validated and is mainly
    /// used by the storage layer when loading habits from the database.
    pub fn from_existing(
        id: HabitId,
        name: String,
        emoji: String,
        category: Category,
        week_schedule: WeekSchedule,
        created_at: DateTime<Utc>,
        order_position: i32,
    ) -> Self {
        Self {
            id,
            name,
            emoji,
            category,
            week_schedule,
            created_at,
            order_position,
        }
    }

    /// Rename the habit with validation
    pub fn rename(&mut self, name: String) -> Result<(), DomainError> {
        Self::validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    // Validation helper methods

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string()
            ));
        }

        Ok(())
    }

    /// Validate the emoji field (a short grapheme string, not free text)
    fn validate_emoji(emoji: &str) -> Result<(), DomainError> {
        if emoji.chars().count() > 8 {
            return Err(DomainError::InvalidValue {
                message: "Emoji cannot be longer than 8 characters".to_string()
            });
        }
        Ok(())
    }
}
