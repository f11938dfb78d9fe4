/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a clean interface for storing and retrieving habits and daily logs.

pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{DailyLog, Habit, HabitId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: HabitId },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the storage interface for habits and daily logs
///
/// This trait allows swapping out SQLite for another backend while
/// keeping the tracker and command layers unchanged. It is the
/// repository surface the progress engine's callers consume.
pub trait HabitStore {
    /// Create a new habit, returning the assigned id
    fn create_habit(&self, habit: &Habit) -> Result<HabitId, StorageError>;

    /// Get a habit by ID
    fn get_habit(&self, habit_id: HabitId) -> Result<Habit, StorageError>;

    /// Update an existing habit
    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Delete a habit; its logs are removed by the cascade
    fn delete_habit(&self, habit_id: HabitId) -> Result<(), StorageError>;

    /// List all habits in manual order, creation order as tiebreak
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError>;

    /// Persist a new manual ordering: position = index in the slice
    fn reorder_habits(&self, habit_ids: &[HabitId]) -> Result<(), StorageError>;

    /// Get all logs (any habit) with dates inside `[start, end]`
    fn logs_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyLog>, StorageError>;

    /// Get the log for one habit on one date, if any
    fn log_for_date(
        &self,
        habit_id: HabitId,
        date: NaiveDate,
    ) -> Result<Option<DailyLog>, StorageError>;

    /// Get a habit's full log history, newest date first
    fn logs_for_habit(&self, habit_id: HabitId) -> Result<Vec<DailyLog>, StorageError>;

    /// Toggle a habit's completion on a date
    ///
    /// Flips the completed flag of an existing record, or inserts a new
    /// record with completed = true when none exists. Returns the
    /// resulting completed state.
    fn toggle_log(&self, habit_id: HabitId, date: NaiveDate) -> Result<bool, StorageError>;
}
