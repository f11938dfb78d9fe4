/// Week and month progress aggregation across all habits
///
/// These specialize the range calculation to the two windows the tracker
/// displays: a Monday-start week and a full calendar month.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{DailyLog, Habit};
use crate::progress::{scheduled_days_in_range, RangeProgress, StreakSummary};

/// A habit together with its materialized weekly state
///
/// The tracker assembles one of these per habit for the selected week:
/// the per-date completion map drives the grid display and the week
/// aggregation, the streaks come from the habit's full history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitWithProgress {
    pub habit: Habit,
    /// Completion state per date of the selected week (absent = unlogged)
    pub week_logs: HashMap<NaiveDate, bool>,
    pub streaks: StreakSummary,
}

/// Monday on or before the given date
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The seven dates of the week starting at `week_start`
pub fn days_in_week(week_start: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|offset| week_start + Duration::days(offset)).collect()
}

/// First and last day of the given calendar month
///
/// Returns None for an invalid month number or a year outside chrono's
/// supported range.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_month - Duration::days(1)))
}

/// Aggregate progress for the selected week across all habits
///
/// A Monday-start week covers every weekday exactly once, so each habit
/// contributes its schedule's active-day count to the denominator. The
/// numerator sums the `true` values in the already-materialized weekly
/// log maps; no re-query happens here.
pub fn compute_week_progress(habits: &[HabitWithProgress]) -> RangeProgress {
    if habits.is_empty() {
        return RangeProgress::zero();
    }

    let total_days: u32 = habits
        .iter()
        .map(|entry| entry.habit.week_schedule.active_day_count())
        .sum();

    let completed_days: u32 = habits
        .iter()
        .map(|entry| entry.week_logs.values().filter(|&&done| done).count() as u32)
        .sum();

    RangeProgress::from_counts(total_days, completed_days)
}

/// Aggregate progress for a calendar month across all habits
///
/// The denominator is schedule-aware: every date of the month is checked
/// against each habit's weekly schedule. The numerator is a flat count of
/// completed logs in the month with no per-habit schedule filter, so a
/// completion logged on an off-schedule day still counts. This matches
/// the week/month asymmetry of the system being reimplemented; see
/// DESIGN.md before changing it.
pub fn compute_month_progress(
    habits: &[Habit],
    month_logs: &[DailyLog],
    year: i32,
    month: u32,
) -> RangeProgress {
    if habits.is_empty() {
        return RangeProgress::zero();
    }

    let Some((month_start, month_end)) = month_bounds(year, month) else {
        return RangeProgress::zero();
    };

    let total_days: u32 = habits
        .iter()
        .map(|habit| scheduled_days_in_range(habit, month_start, month_end))
        .sum();

    let completed_days = month_logs.iter().filter(|log| log.completed).count() as u32;

    RangeProgress::from_counts(total_days, completed_days)
}
