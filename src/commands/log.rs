/// Command for toggling a habit's completion on a date

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{DomainError, HabitId};
use crate::storage::HabitStore;
use crate::AppError;

/// Response from toggling a day
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub habit_id: i64,
    pub habit_name: String,
    pub date: NaiveDate,
    pub completed: bool,
    pub message: String,
}

/// Toggle the given habit on the given date
///
/// `today` bounds the date: logging the future is rejected before the
/// store is touched.
pub fn toggle_day<S: HabitStore>(
    store: &S,
    habit_id: HabitId,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<ToggleResponse, AppError> {
    if date > today {
        return Err(DomainError::InvalidDate(format!(
            "cannot log a future date: '{}'",
            date
        ))
        .into());
    }

    let habit = store.get_habit(habit_id)?;
    let completed = store.toggle_log(habit_id, date)?;

    let message = if completed {
        format!("Marked '{}' completed on {}", habit.name, date)
    } else {
        format!("Unmarked '{}' on {}", habit.name, date)
    };

    Ok(ToggleResponse {
        habit_id: habit_id.as_i64(),
        habit_name: habit.name,
        date,
        completed,
        message,
    })
}
