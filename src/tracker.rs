/// Caller-side state for the habit grid
///
/// The progress engine is pure; the only mutable state in the system is
/// which week and month are currently selected, and it lives here. The
/// tracker recomputes a full snapshot from storage on every read instead
/// of maintaining a reactive pipeline, so a snapshot taken after any
/// mutation always reflects it.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::domain::{completed_dates_descending, DailyLog, Habit, HabitId};
use crate::progress::{
    compute_month_progress, compute_streaks, compute_week_progress, days_in_week,
    week_start_of, HabitWithProgress, RangeProgress,
};
use crate::storage::HabitStore;
use crate::AppError;

/// Everything the display layer needs for one render of the grid
///
/// Derived fresh on every call to `snapshot`; holds no live references
/// into storage.
#[derive(Debug, Clone, Serialize)]
pub struct TrackerSnapshot {
    pub habits: Vec<HabitWithProgress>,
    pub week_progress: RangeProgress,
    pub month_progress: RangeProgress,
    pub week_start: NaiveDate,
    pub days_in_week: Vec<NaiveDate>,
    pub year: i32,
    pub month: u32,
}

/// Habit tracker holding the selected week/month and the storage handle
pub struct HabitTracker<S: HabitStore> {
    store: S,
    week_start: NaiveDate,
    year: i32,
    month: u32,
}

impl<S: HabitStore> HabitTracker<S> {
    /// Create a tracker positioned on the week and month containing `today`
    pub fn new(store: S, today: NaiveDate) -> Self {
        let week_start = week_start_of(today);
        Self {
            store,
            week_start,
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Move the selected week forward; the month follows the new anchor
    pub fn next_week(&mut self) {
        self.set_week_start(self.week_start + Duration::days(7));
    }

    /// Move the selected week back; the month follows the new anchor
    pub fn previous_week(&mut self) {
        self.set_week_start(self.week_start - Duration::days(7));
    }

    /// Jump directly to the week containing `date`
    pub fn go_to(&mut self, date: NaiveDate) {
        self.set_week_start(week_start_of(date));
    }

    fn set_week_start(&mut self, week_start: NaiveDate) {
        self.week_start = week_start;
        self.year = week_start.year();
        self.month = week_start.month();
    }

    /// Recompute the full tracker state from storage
    ///
    /// `today` feeds the streak calculation and is injected by the caller
    /// so snapshots are reproducible in tests.
    pub fn snapshot(&self, today: NaiveDate) -> Result<TrackerSnapshot, AppError> {
        let habits = self.store.list_habits()?;

        let week_end = self.week_start + Duration::days(6);
        let week_logs = self.store.logs_in_range(self.week_start, week_end)?;
        let mut logs_by_habit: HashMap<HabitId, HashMap<NaiveDate, bool>> = HashMap::new();
        for log in &week_logs {
            logs_by_habit
                .entry(log.habit_id)
                .or_default()
                .insert(log.date, log.completed);
        }

        let mut entries = Vec::with_capacity(habits.len());
        for habit in habits {
            let history = self.store.logs_for_habit(habit.id)?;
            let streaks = compute_streaks(&completed_dates_descending(&history), today);
            let week_logs = logs_by_habit.remove(&habit.id).unwrap_or_default();
            entries.push(HabitWithProgress {
                habit,
                week_logs,
                streaks,
            });
        }

        let week_progress = compute_week_progress(&entries);
        let month_progress = self.month_progress(&entries)?;

        Ok(TrackerSnapshot {
            habits: entries,
            week_progress,
            month_progress,
            week_start: self.week_start,
            days_in_week: days_in_week(self.week_start),
            year: self.year,
            month: self.month,
        })
    }

    fn month_progress(&self, entries: &[HabitWithProgress]) -> Result<RangeProgress, AppError> {
        let habits: Vec<Habit> = entries.iter().map(|e| e.habit.clone()).collect();
        let Some((month_start, month_end)) =
            crate::progress::month_bounds(self.year, self.month)
        else {
            return Ok(RangeProgress::zero());
        };
        let month_logs: Vec<DailyLog> = self.store.logs_in_range(month_start, month_end)?;
        Ok(compute_month_progress(
            &habits,
            &month_logs,
            self.year,
            self.month,
        ))
    }

    /// Create a habit, returning it with its assigned id
    pub fn add_habit(&self, mut habit: Habit) -> Result<Habit, AppError> {
        habit.id = self.store.create_habit(&habit)?;
        Ok(habit)
    }

    pub fn update_habit(&self, habit: &Habit) -> Result<(), AppError> {
        self.store.update_habit(habit).map_err(AppError::from)
    }

    pub fn delete_habit(&self, habit_id: HabitId) -> Result<(), AppError> {
        self.store.delete_habit(habit_id).map_err(AppError::from)
    }

    pub fn reorder_habits(&self, habit_ids: &[HabitId]) -> Result<(), AppError> {
        self.store.reorder_habits(habit_ids).map_err(AppError::from)
    }

    /// Toggle a habit's completion on a date, returning the new state
    pub fn toggle_day(&self, habit_id: HabitId, date: NaiveDate) -> Result<bool, AppError> {
        self.store.toggle_log(habit_id, date).map_err(AppError::from)
    }
}
