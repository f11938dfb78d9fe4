/// Command for checking habit streaks

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{completed_dates_descending, HabitId};
use crate::progress::compute_streaks;
use crate::storage::HabitStore;
use crate::AppError;

/// Streak status for a single habit
#[derive(Debug, Serialize)]
pub struct HabitStatus {
    pub habit_id: i64,
    pub name: String,
    pub emoji: String,
    pub current_streak: u32,
    pub best_streak: u32,
    pub last_completed: Option<NaiveDate>,
}

/// Response from checking habit status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub habits: Vec<HabitStatus>,
    pub message: String,
}

/// Get streak status for one habit, or for all habits when id is None
pub fn habit_status<S: HabitStore>(
    store: &S,
    habit_id: Option<HabitId>,
    today: NaiveDate,
) -> Result<StatusResponse, AppError> {
    let habits = match habit_id {
        Some(id) => vec![store.get_habit(id)?],
        None => store.list_habits()?,
    };

    let mut statuses = Vec::with_capacity(habits.len());
    for habit in habits {
        let logs = store.logs_for_habit(habit.id)?;
        let completed = completed_dates_descending(&logs);
        let streaks = compute_streaks(&completed, today);

        statuses.push(HabitStatus {
            habit_id: habit.id.as_i64(),
            name: habit.name,
            emoji: habit.emoji,
            current_streak: streaks.current_streak,
            best_streak: streaks.best_streak,
            last_completed: completed.first().copied(),
        });
    }

    let active = statuses.iter().filter(|s| s.current_streak > 0).count();
    let message = if statuses.is_empty() {
        "No habits to report on.".to_string()
    } else {
        format!("{} of {} habit(s) have an active streak", active, statuses.len())
    };

    Ok(StatusResponse {
        habits: statuses,
        message,
    })
}
