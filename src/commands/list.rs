/// Command for listing habits

use serde::Serialize;

use crate::commands::HabitReport;
use crate::storage::HabitStore;
use crate::AppError;

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub habits: Vec<HabitReport>,
    pub message: String,
}

/// List all habits in their manual order
pub fn list_habits<S: HabitStore>(store: &S) -> Result<ListResponse, AppError> {
    let habits = store.list_habits()?;

    let message = if habits.is_empty() {
        "No habits yet. Add one with 'habitgrid add'.".to_string()
    } else {
        format!("{} habit(s)", habits.len())
    };

    Ok(ListResponse {
        habits: habits.iter().map(HabitReport::from_habit).collect(),
        message,
    })
}
