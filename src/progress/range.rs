/// Schedule-aware completion progress over a closed date range
///
/// This module counts, for a set of habits, how many scheduled days fall
/// inside an arbitrary `[start, end]` range and how many of them were
/// actually completed.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{DailyLog, Habit};

/// Aggregate completion progress for a date range
///
/// `total_days` is the sum over all habits of their scheduled days inside
/// the range, NOT range length times habit count. Derived fresh on every
/// query; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeProgress {
    /// Scheduled habit-days inside the range, summed across habits
    pub total_days: u32,
    /// Completed habit-days inside the range
    pub completed_days: u32,
    /// 100 * completed / total, or 0 when nothing was scheduled
    pub percentage: f32,
}

impl RangeProgress {
    pub fn zero() -> Self {
        Self {
            total_days: 0,
            completed_days: 0,
            percentage: 0.0,
        }
    }

    /// Build a progress value from raw counts, guarding the zero case
    pub fn from_counts(total_days: u32, completed_days: u32) -> Self {
        let percentage = if total_days > 0 {
            completed_days as f32 / total_days as f32 * 100.0
        } else {
            0.0
        };
        Self {
            total_days,
            completed_days,
            percentage,
        }
    }
}

/// Count the days in `[start, end]` the habit's schedule marks active
///
/// O(range length) per habit, which is fine for the week- and month-sized
/// ranges this system works with.
pub fn scheduled_days_in_range(habit: &Habit, start: NaiveDate, end: NaiveDate) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if habit.week_schedule.is_active_on_date(current) {
            count += 1;
        }
        current += Duration::days(1);
    }
    count
}

/// Compute schedule-aware progress for a set of habits over `[start, end]`
///
/// `logs` may contain records outside the range or for habits outside the
/// set; both are filtered out. Zero habits or an inverted range produce
/// the zero result, never an error.
pub fn compute_range_progress(
    habits: &[Habit],
    logs: &[DailyLog],
    start: NaiveDate,
    end: NaiveDate,
) -> RangeProgress {
    if habits.is_empty() || start > end {
        return RangeProgress::zero();
    }

    let total_days: u32 = habits
        .iter()
        .map(|habit| scheduled_days_in_range(habit, start, end))
        .sum();

    let habit_ids: HashSet<_> = habits.iter().map(|habit| habit.id).collect();
    let completed_days = logs
        .iter()
        .filter(|log| {
            log.completed
                && log.date >= start
                && log.date <= end
                && habit_ids.contains(&log.habit_id)
        })
        .count() as u32;

    RangeProgress::from_counts(total_days, completed_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, HabitId, WeekSchedule};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(id: i64, schedule: WeekSchedule) -> Habit {
        let mut habit = Habit::new(
            format!("habit-{}", id),
            "✅".to_string(),
            Category::Personal,
            schedule,
        )
        .unwrap();
        habit.id = HabitId(id);
        habit
    }

    #[test]
    fn test_weekday_habit_over_full_week() {
        // 2024-06-03 is a Monday; the week runs through Sunday the 9th.
        let monday = date(2024, 6, 3);
        let sunday = date(2024, 6, 9);
        let habits = [habit(1, WeekSchedule::weekdays())];

        let logs: Vec<DailyLog> = (3..=7)
            .map(|d| DailyLog::new(HabitId(1), date(2024, 6, d), true))
            .collect();

        let progress = compute_range_progress(&habits, &logs, monday, sunday);
        assert_eq!(progress.total_days, 5);
        assert_eq!(progress.completed_days, 5);
        assert_eq!(progress.percentage, 100.0);
    }

    #[test]
    fn test_zero_habits_is_zero_not_error() {
        let progress =
            compute_range_progress(&[], &[], date(2024, 6, 3), date(2024, 6, 9));
        assert_eq!(progress, RangeProgress::zero());
    }

    #[test]
    fn test_all_inactive_schedule_gives_zero_percentage() {
        let habits = [habit(1, WeekSchedule::no_days())];
        let logs = [DailyLog::new(HabitId(1), date(2024, 6, 4), true)];

        let progress =
            compute_range_progress(&habits, &logs, date(2024, 6, 3), date(2024, 6, 9));
        assert_eq!(progress.total_days, 0);
        assert_eq!(progress.percentage, 0.0);
    }

    #[test]
    fn test_logs_outside_range_and_set_are_ignored() {
        let habits = [habit(1, WeekSchedule::every_day())];
        let logs = [
            DailyLog::new(HabitId(1), date(2024, 6, 4), true),
            // outside range
            DailyLog::new(HabitId(1), date(2024, 6, 10), true),
            // other habit
            DailyLog::new(HabitId(2), date(2024, 6, 5), true),
            // not completed
            DailyLog::new(HabitId(1), date(2024, 6, 6), false),
        ];

        let progress =
            compute_range_progress(&habits, &logs, date(2024, 6, 3), date(2024, 6, 9));
        assert_eq!(progress.total_days, 7);
        assert_eq!(progress.completed_days, 1);
    }

    #[test]
    fn test_total_sums_across_habits() {
        let habits = [
            habit(1, WeekSchedule::every_day()),
            habit(2, WeekSchedule::weekdays()),
        ];
        let progress =
            compute_range_progress(&habits, &[], date(2024, 6, 3), date(2024, 6, 9));
        assert_eq!(progress.total_days, 12);
        assert_eq!(progress.completed_days, 0);
        assert_eq!(progress.percentage, 0.0);
    }

    #[test]
    fn test_single_day_range() {
        // 2024-06-08 is a Saturday, outside a Mon-Fri schedule.
        let habits = [habit(1, WeekSchedule::weekdays())];
        let saturday = date(2024, 6, 8);
        let progress = compute_range_progress(&habits, &[], saturday, saturday);
        assert_eq!(progress.total_days, 0);

        let friday = date(2024, 6, 7);
        let progress = compute_range_progress(&habits, &[], friday, friday);
        assert_eq!(progress.total_days, 1);
    }
}
