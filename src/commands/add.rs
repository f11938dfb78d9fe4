/// Command for creating a new habit

use serde::Serialize;

use crate::commands::HabitReport;
use crate::domain::{Category, Habit, WeekSchedule};
use crate::storage::HabitStore;
use crate::AppError;

/// Parameters for creating a habit
#[derive(Debug)]
pub struct AddParams {
    pub name: String,
    /// Empty string means "use the category default"
    pub emoji: String,
    pub category: Category,
    /// '1'/'0' Monday-first schedule string; short strings pad to active
    pub schedule: String,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub habit: HabitReport,
    pub message: String,
}

/// Create a habit and persist it
pub fn add_habit<S: HabitStore>(store: &S, params: AddParams) -> Result<AddResponse, AppError> {
    let schedule = WeekSchedule::from_storage_string(&params.schedule);
    let mut habit = Habit::new(params.name, params.emoji, params.category, schedule)?;

    // New habits go to the end of the manual ordering
    habit.order_position = store.list_habits()?.len() as i32;
    habit.id = store.create_habit(&habit)?;

    tracing::info!("Added habit '{}' with id {}", habit.name, habit.id);

    let message = format!(
        "Added '{}' ({}), scheduled {}",
        habit.name,
        habit.emoji,
        habit.week_schedule
    );
    Ok(AddResponse {
        habit: HabitReport::from_habit(&habit),
        message,
    })
}
