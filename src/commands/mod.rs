/// User-facing operations bound to CLI subcommands
///
/// Each submodule implements one operation against the storage trait and
/// returns a serializable report, so main.rs can render either plain text
/// or JSON from the same result.

pub mod add;
pub mod list;
pub mod log;
pub mod status;
pub mod summary;

pub use add::*;
pub use list::*;
pub use log::*;
pub use status::*;
pub use summary::*;

use serde::Serialize;

use crate::domain::Habit;

/// One habit as shown in command output
#[derive(Debug, Serialize)]
pub struct HabitReport {
    pub id: i64,
    pub name: String,
    pub emoji: String,
    pub category: String,
    pub schedule: String,
    pub active_days_per_week: u32,
}

impl HabitReport {
    pub fn from_habit(habit: &Habit) -> Self {
        Self {
            id: habit.id.as_i64(),
            name: habit.name.clone(),
            emoji: habit.emoji.clone(),
            category: habit.category.display_name().to_string(),
            schedule: habit.week_schedule.to_string(),
            active_days_per_week: habit.week_schedule.active_day_count(),
        }
    }
}
