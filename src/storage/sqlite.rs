/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habit data. It handles all SQL queries and data
/// conversion between rows and domain types.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use crate::domain::{Category, DailyLog, Habit, HabitId, WeekSchedule};
use crate::storage::{migrations, HabitStore, StorageError};

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the storage operations defined in the HabitStore trait.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite storage instance backed by a file
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        let store = Self::with_connection(conn)?;
        tracing::info!("SQLite storage initialized at: {}", db_path.display());
        Ok(store)
    }

    /// Create an in-memory storage instance (used by tests)
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        // Cascade deletes from habits to daily_logs need this pragma
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }

    /// Convert a habits row into a Habit
    fn habit_from_row(row: &Row<'_>) -> rusqlite::Result<Habit> {
        let created_at_str: String = row.get(5)?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|_| {
                rusqlite::Error::InvalidColumnType(
                    5,
                    "Invalid datetime".to_string(),
                    rusqlite::types::Type::Text,
                )
            })?
            .with_timezone(&chrono::Utc);

        let category_str: String = row.get(3)?;
        let week_days: String = row.get(4)?;

        Ok(Habit::from_existing(
            HabitId(row.get(0)?),
            row.get(1)?, // name
            row.get(2)?, // emoji
            Category::from_name(&category_str),
            WeekSchedule::from_storage_string(&week_days),
            created_at,
            row.get(6)?, // order_position
        ))
    }

    /// Convert a daily_logs row into a DailyLog
    ///
    /// A malformed date column surfaces as a column error naming the
    /// stored value rather than silently dropping the record.
    fn log_from_row(row: &Row<'_>) -> rusqlite::Result<DailyLog> {
        let date_str: String = row.get(2)?;
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                2,
                format!("Invalid date: '{}'", date_str),
                rusqlite::types::Type::Text,
            )
        })?;

        Ok(DailyLog::from_existing(
            row.get(0)?,
            HabitId(row.get(1)?),
            date,
            row.get(3)?,
        ))
    }
}

const HABIT_COLUMNS: &str =
    "id, name, emoji, category, week_days, created_at, order_position";
const LOG_COLUMNS: &str = "id, habit_id, date, completed";

impl HabitStore for SqliteStore {
    /// Create a new habit in the database
    fn create_habit(&self, habit: &Habit) -> Result<HabitId, StorageError> {
        self.conn.execute(
            "INSERT INTO habits (name, emoji, category, week_days, created_at, order_position)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                habit.name,
                habit.emoji,
                habit.category.storage_name(),
                habit.week_schedule.to_storage_string(),
                habit.created_at.to_rfc3339(),
                habit.order_position,
            ],
        )?;

        let id = HabitId(self.conn.last_insert_rowid());
        tracing::debug!("Created habit: {} ({})", habit.name, id);
        Ok(id)
    }

    /// Get a habit by its ID
    fn get_habit(&self, habit_id: HabitId) -> Result<Habit, StorageError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM habits WHERE id = ?1",
            HABIT_COLUMNS
        ))?;

        let result = stmt.query_row(params![habit_id.as_i64()], Self::habit_from_row);

        match result {
            Ok(habit) => Ok(habit),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Err(StorageError::HabitNotFound { habit_id })
            }
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Update an existing habit
    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "UPDATE habits SET
                name = ?2,
                emoji = ?3,
                category = ?4,
                week_days = ?5,
                order_position = ?6
             WHERE id = ?1",
            params![
                habit.id.as_i64(),
                habit.name,
                habit.emoji,
                habit.category.storage_name(),
                habit.week_schedule.to_storage_string(),
                habit.order_position,
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound { habit_id: habit.id });
        }

        tracing::debug!("Updated habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    /// Delete a habit; daily logs go with it via the FK cascade
    fn delete_habit(&self, habit_id: HabitId) -> Result<(), StorageError> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM habits WHERE id = ?1", params![habit_id.as_i64()])?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound { habit_id });
        }

        tracing::debug!("Deleted habit: {}", habit_id);
        Ok(())
    }

    /// List all habits in manual order
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM habits ORDER BY order_position ASC, created_at ASC, id ASC",
            HABIT_COLUMNS
        ))?;

        let habit_iter = stmt.query_map([], Self::habit_from_row)?;

        let mut habits = Vec::new();
        for habit in habit_iter {
            habits.push(habit?);
        }

        Ok(habits)
    }

    /// Persist a new manual ordering
    fn reorder_habits(&self, habit_ids: &[HabitId]) -> Result<(), StorageError> {
        for (position, habit_id) in habit_ids.iter().enumerate() {
            let rows_affected = self.conn.execute(
                "UPDATE habits SET order_position = ?2 WHERE id = ?1",
                params![habit_id.as_i64(), position as i32],
            )?;

            if rows_affected == 0 {
                return Err(StorageError::HabitNotFound { habit_id: *habit_id });
            }
        }

        tracing::debug!("Reordered {} habits", habit_ids.len());
        Ok(())
    }

    /// Get all logs within a date range, ordered by date
    fn logs_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyLog>, StorageError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM daily_logs WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC",
            LOG_COLUMNS
        ))?;

        let log_iter = stmt.query_map(
            params![start.to_string(), end.to_string()],
            Self::log_from_row,
        )?;

        let mut logs = Vec::new();
        for log in log_iter {
            logs.push(log?);
        }

        Ok(logs)
    }

    /// Get the log for one habit on one date, if any
    fn log_for_date(
        &self,
        habit_id: HabitId,
        date: NaiveDate,
    ) -> Result<Option<DailyLog>, StorageError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM daily_logs WHERE habit_id = ?1 AND date = ?2",
            LOG_COLUMNS
        ))?;

        let result = stmt.query_row(
            params![habit_id.as_i64(), date.to_string()],
            Self::log_from_row,
        );

        match result {
            Ok(log) => Ok(Some(log)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Get a habit's full log history, newest date first
    ///
    /// Descending order is the precondition of the streak calculator, so
    /// it is guaranteed here at the query level.
    fn logs_for_habit(&self, habit_id: HabitId) -> Result<Vec<DailyLog>, StorageError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM daily_logs WHERE habit_id = ?1 ORDER BY date DESC",
            LOG_COLUMNS
        ))?;

        let log_iter = stmt.query_map(params![habit_id.as_i64()], Self::log_from_row)?;

        let mut logs = Vec::new();
        for log in log_iter {
            logs.push(log?);
        }

        Ok(logs)
    }

    /// Toggle a habit's completion on a date
    fn toggle_log(&self, habit_id: HabitId, date: NaiveDate) -> Result<bool, StorageError> {
        // Verify the habit exists so toggling a bogus id fails loudly
        // instead of inserting an orphaned row.
        self.get_habit(habit_id)?;

        match self.log_for_date(habit_id, date)? {
            Some(existing) => {
                let completed = !existing.completed;
                self.conn.execute(
                    "UPDATE daily_logs SET completed = ?2 WHERE id = ?1",
                    params![existing.id, completed],
                )?;
                tracing::debug!(
                    "Toggled log for habit {} on {}: completed = {}",
                    habit_id,
                    date,
                    completed
                );
                Ok(completed)
            }
            None => {
                self.conn.execute(
                    "INSERT INTO daily_logs (habit_id, date, completed) VALUES (?1, ?2, 1)",
                    params![habit_id.as_i64(), date.to_string()],
                )?;
                tracing::debug!("Logged habit {} on {}: completed = true", habit_id, date);
                Ok(true)
            }
        }
    }
}
