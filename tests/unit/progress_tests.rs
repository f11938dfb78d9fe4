/// Unit tests for the progress engine's published properties
use std::collections::HashMap;

use chrono::NaiveDate;
use habitgrid::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn habit_with_schedule(id: i64, schedule: WeekSchedule) -> Habit {
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

#[cfg(test)]
mod schedule_properties {
    use super::*;

    #[test]
    fn test_round_trip_over_all_encodings() {
        // Every one of the 128 possible schedules survives the codec.
        for bits in 0u8..128 {
            let mut days = [false; 7];
            for (i, day) in days.iter_mut().enumerate() {
                *day = bits & (1 << i) != 0;
            }
            let schedule = WeekSchedule::new(days);
            assert_eq!(
                WeekSchedule::from_storage_string(&schedule.to_storage_string()),
                schedule
            );
        }
    }

    #[test]
    fn test_legacy_padding_defaults_active() {
        let schedule = WeekSchedule::from_storage_string("101");
        assert!(schedule.is_active_on(chrono::Weekday::Mon));
        assert!(!schedule.is_active_on(chrono::Weekday::Tue));
        assert!(schedule.is_active_on(chrono::Weekday::Thu));
        assert!(schedule.is_active_on(chrono::Weekday::Sun));
    }
}

#[cfg(test)]
mod streak_properties {
    use super::*;

    #[test]
    fn test_empty_history_is_zero() {
        assert_eq!(
            compute_streaks(&[], date(2024, 6, 3)),
            StreakSummary { current_streak: 0, best_streak: 0 }
        );
    }

    #[test]
    fn test_consecutive_days_ending_today() {
        let dates = [date(2024, 6, 3), date(2024, 6, 2), date(2024, 6, 1)];
        let summary = compute_streaks(&dates, date(2024, 6, 3));
        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.best_streak, 3);
    }

    #[test]
    fn test_single_missed_day_breaks_both_streaks() {
        let dates = [date(2024, 6, 3), date(2024, 6, 1)];
        let summary = compute_streaks(&dates, date(2024, 6, 3));
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.best_streak, 1);
    }

    #[test]
    fn test_best_at_least_current_across_histories() {
        // A spread of histories with runs in different places.
        let histories: Vec<Vec<NaiveDate>> = vec![
            vec![],
            vec![date(2024, 6, 3)],
            vec![date(2024, 6, 3), date(2024, 6, 2), date(2024, 5, 20)],
            vec![date(2024, 5, 10), date(2024, 5, 9), date(2024, 5, 8)],
            (0..30)
                .map(|i| date(2024, 6, 3) - chrono::Duration::days(i * 2))
                .collect(),
        ];

        for history in histories {
            let summary = compute_streaks(&history, date(2024, 6, 3));
            assert!(
                summary.best_streak >= summary.current_streak,
                "violated for history {:?}",
                history
            );
        }
    }
}

#[cfg(test)]
mod range_properties {
    use super::*;

    #[test]
    fn test_weekday_habit_fully_logged_week() {
        let habits = [habit_with_schedule(1, WeekSchedule::weekdays())];
        let logs: Vec<DailyLog> = (3..=7)
            .map(|d| DailyLog::new(HabitId(1), date(2024, 6, d), true))
            .collect();

        let progress =
            compute_range_progress(&habits, &logs, date(2024, 6, 3), date(2024, 6, 9));
        assert_eq!(progress.total_days, 5);
        assert_eq!(progress.completed_days, 5);
        assert_eq!(progress.percentage, 100.0);
    }

    #[test]
    fn test_zero_habits_never_divides() {
        let progress =
            compute_range_progress(&[], &[], date(2024, 6, 3), date(2024, 6, 9));
        assert_eq!(progress.percentage, 0.0);
        assert!(progress.percentage.is_finite());
    }
}

#[cfg(test)]
mod aggregate_properties {
    use super::*;

    #[test]
    fn test_week_and_month_zero_habits() {
        assert_eq!(compute_week_progress(&[]), RangeProgress::zero());
        assert_eq!(
            compute_month_progress(&[], &[], 2024, 6),
            RangeProgress::zero()
        );
    }

    #[test]
    fn test_month_all_inactive_schedule_is_zero_percent() {
        let habits = [habit_with_schedule(1, WeekSchedule::no_days())];
        let logs = [DailyLog::new(HabitId(1), date(2024, 6, 5), true)];
        let progress = compute_month_progress(&habits, &logs, 2024, 6);
        assert_eq!(progress.total_days, 0);
        assert_eq!(progress.percentage, 0.0);
    }

    #[test]
    fn test_month_numerator_ignores_schedule() {
        // Off-schedule completions inflate the month numerator; this is
        // the documented week/month asymmetry.
        let habits = [habit_with_schedule(1, WeekSchedule::new([
            true, false, false, false, false, false, false,
        ]))];
        let logs: Vec<DailyLog> = (1..=30)
            .map(|d| DailyLog::new(HabitId(1), date(2024, 6, d), true))
            .collect();

        let progress = compute_month_progress(&habits, &logs, 2024, 6);
        // June 2024 has 4 Mondays but all 30 days were logged.
        assert_eq!(progress.total_days, 4);
        assert_eq!(progress.completed_days, 30);
        assert!(progress.percentage > 100.0);
    }

    #[test]
    fn test_week_progress_uses_materialized_maps() {
        let entry = HabitWithProgress {
            habit: habit_with_schedule(1, WeekSchedule::weekdays()),
            week_logs: HashMap::from([
                (date(2024, 6, 3), true),
                (date(2024, 6, 4), true),
                (date(2024, 6, 5), false),
            ]),
            streaks: StreakSummary { current_streak: 0, best_streak: 0 },
        };

        let progress = compute_week_progress(&[entry]);
        assert_eq!(progress.total_days, 5);
        assert_eq!(progress.completed_days, 2);
        assert_eq!(progress.percentage, 40.0);
    }
}
