/// DailyLog entity for tracking habit completions
///
/// This module defines the DailyLog struct that represents whether a habit
/// was completed on a specific calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::HabitId;

/// A record of a habit's completion state on one calendar date
///
/// At most one log exists per (habit, date) pair; the storage layer
/// enforces this with a unique index. Toggling a day flips the completed
/// flag of the existing record instead of inserting a second one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Storage row id (0 until persisted)
    pub id: i64,
    /// Which habit this log is for
    pub habit_id: HabitId,
    /// The calendar date this log covers, no time component
    pub date: NaiveDate,
    /// Whether the habit was completed on that date
    pub completed: bool,
}

impl DailyLog {
    /// Create a new unpersisted log record
    pub fn new(habit_id: HabitId, date: NaiveDate, completed: bool) -> Self {
        Self {
            id: 0,
            habit_id,
            date,
            completed,
        }
    }

    /// Create a log from existing data (used when loading from storage)
    pub fn from_existing(id: i64, habit_id: HabitId, date: NaiveDate, completed: bool) -> Self {
        Self {
            id,
            habit_id,
            date,
            completed,
        }
    }
}

/// Extract the completed dates from a habit's logs, newest first
///
/// This produces the exact input shape the streak calculator expects:
/// only completed records, dates descending. Callers that already hold a
/// habit's full log history use this instead of re-sorting by hand.
pub fn completed_dates_descending(logs: &[DailyLog]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = logs
        .iter()
        .filter(|log| log.completed)
        .map(|log| log.date)
        .collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates
}
