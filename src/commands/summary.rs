/// Command for the week/month progress summary

use chrono::NaiveDate;
use serde::Serialize;

use crate::progress::RangeProgress;
use crate::storage::HabitStore;
use crate::tracker::{HabitTracker, TrackerSnapshot};
use crate::AppError;

/// Per-habit line in the summary output
#[derive(Debug, Serialize)]
pub struct HabitWeekLine {
    pub name: String,
    pub emoji: String,
    pub current_streak: u32,
    pub best_streak: u32,
    /// One cell per day of the week: '+' done, '-' missed, '.' unlogged,
    /// ' ' not scheduled
    pub week_cells: String,
}

/// Response from the summary command
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub week_start: NaiveDate,
    pub week_progress: RangeProgress,
    pub month_progress: RangeProgress,
    pub habits: Vec<HabitWeekLine>,
    pub message: String,
}

/// Build the week/month summary for the week containing `anchor`
pub fn progress_summary<S: HabitStore>(
    store: S,
    anchor: NaiveDate,
    today: NaiveDate,
) -> Result<SummaryResponse, AppError> {
    let mut tracker = HabitTracker::new(store, today);
    tracker.go_to(anchor);
    let snapshot = tracker.snapshot(today)?;
    Ok(render_summary(&snapshot))
}

fn render_summary(snapshot: &TrackerSnapshot) -> SummaryResponse {
    let habits = snapshot
        .habits
        .iter()
        .map(|entry| {
            let week_cells = snapshot
                .days_in_week
                .iter()
                .map(|&day| {
                    let scheduled = entry.habit.week_schedule.is_active_on_date(day);
                    match (scheduled, entry.week_logs.get(&day)) {
                        (_, Some(true)) => '+',
                        (_, Some(false)) => '-',
                        (true, None) => '.',
                        (false, None) => ' ',
                    }
                })
                .collect();

            HabitWeekLine {
                name: entry.habit.name.clone(),
                emoji: entry.habit.emoji.clone(),
                current_streak: entry.streaks.current_streak,
                best_streak: entry.streaks.best_streak,
                week_cells,
            }
        })
        .collect();

    let message = format!(
        "Week of {}: {}/{} ({:.0}%). Month {}-{:02}: {}/{} ({:.0}%).",
        snapshot.week_start,
        snapshot.week_progress.completed_days,
        snapshot.week_progress.total_days,
        snapshot.week_progress.percentage,
        snapshot.year,
        snapshot.month,
        snapshot.month_progress.completed_days,
        snapshot.month_progress.total_days,
        snapshot.month_progress.percentage,
    );

    SummaryResponse {
        week_start: snapshot.week_start,
        week_progress: snapshot.week_progress,
        month_progress: snapshot.month_progress,
        habits,
        message,
    }
}
