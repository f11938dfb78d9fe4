/// End-to-end workflow tests against a file-backed SQLite store
use chrono::NaiveDate;
use habitgrid::*;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_habit(name: &str, category: Category, schedule: WeekSchedule) -> Habit {
    Habit::new(name.to_string(), String::new(), category, schedule).unwrap()
}

#[test]
fn test_full_tracking_workflow() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let store = SqliteStore::open(temp_file.path()).expect("Failed to open storage");

    // Wednesday 2024-06-05; the displayed week is Jun 3 through Jun 9.
    let today = date(2024, 6, 5);
    let tracker = HabitTracker::new(store, today);

    let run = tracker
        .add_habit(new_habit("Run", Category::Health, WeekSchedule::weekdays()))
        .unwrap();
    let read = tracker
        .add_habit(new_habit("Read", Category::Learning, WeekSchedule::every_day()))
        .unwrap();

    // Run: Mon-Wed. Read: Mon and Wed (gap Tuesday).
    for d in [3, 4, 5] {
        tracker.toggle_day(run.id, date(2024, 6, d)).unwrap();
    }
    tracker.toggle_day(read.id, date(2024, 6, 3)).unwrap();
    tracker.toggle_day(read.id, date(2024, 6, 5)).unwrap();

    let snapshot = tracker.snapshot(today).unwrap();

    assert_eq!(snapshot.habits.len(), 2);
    let run_entry = &snapshot.habits[0];
    let read_entry = &snapshot.habits[1];

    assert_eq!(run_entry.streaks.current_streak, 3);
    assert_eq!(run_entry.streaks.best_streak, 3);
    assert_eq!(read_entry.streaks.current_streak, 1);
    assert_eq!(read_entry.streaks.best_streak, 1);

    // Week: 5 scheduled days for Run + 7 for Read, 5 completions total.
    assert_eq!(snapshot.week_progress.total_days, 12);
    assert_eq!(snapshot.week_progress.completed_days, 5);

    // Month: June 2024 has 20 weekdays + 30 days = 50 scheduled days.
    assert_eq!(snapshot.month_progress.total_days, 50);
    assert_eq!(snapshot.month_progress.completed_days, 5);
    assert_eq!(snapshot.month_progress.percentage, 10.0);
}

#[test]
fn test_persistence_across_reopen() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let today = date(2024, 6, 5);

    let habit_id = {
        let store = SqliteStore::open(temp_file.path()).unwrap();
        let habit = Habit::new(
            "Meditate".to_string(),
            "🧘".to_string(),
            Category::Personal,
            WeekSchedule::every_day(),
        )
        .unwrap();
        let id = store.create_habit(&habit).unwrap();
        store.toggle_log(id, today).unwrap();
        id
    };

    // Reopen the same file with a fresh connection
    let store = SqliteStore::open(temp_file.path()).unwrap();
    let habit = store.get_habit(habit_id).unwrap();
    assert_eq!(habit.name, "Meditate");

    let tracker = HabitTracker::new(store, today);
    let snapshot = tracker.snapshot(today).unwrap();
    assert_eq!(snapshot.habits[0].streaks.current_streak, 1);
    assert_eq!(snapshot.week_progress.completed_days, 1);
}

#[test]
fn test_week_navigation_changes_window() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let store = SqliteStore::open(temp_file.path()).unwrap();

    let today = date(2024, 6, 5);
    let mut tracker = HabitTracker::new(store, today);
    let habit = tracker
        .add_habit(new_habit("Run", Category::Health, WeekSchedule::every_day()))
        .unwrap();

    // Log in the current week and in the previous week
    tracker.toggle_day(habit.id, date(2024, 6, 4)).unwrap();
    tracker.toggle_day(habit.id, date(2024, 5, 29)).unwrap();

    let snapshot = tracker.snapshot(today).unwrap();
    assert_eq!(snapshot.week_progress.completed_days, 1);

    tracker.previous_week();
    let snapshot = tracker.snapshot(today).unwrap();
    assert_eq!(snapshot.week_start, date(2024, 5, 27));
    assert_eq!(snapshot.week_progress.completed_days, 1);
    // The month follows the week anchor back into May
    assert_eq!((snapshot.year, snapshot.month), (2024, 5));
    assert_eq!(snapshot.month_progress.completed_days, 1);
}

#[test]
fn test_delete_habit_removes_history() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let store = SqliteStore::open(temp_file.path()).unwrap();

    let today = date(2024, 6, 5);
    let tracker = HabitTracker::new(store, today);
    let habit = tracker
        .add_habit(new_habit("Run", Category::Health, WeekSchedule::every_day()))
        .unwrap();
    tracker.toggle_day(habit.id, today).unwrap();

    tracker.delete_habit(habit.id).unwrap();

    let snapshot = tracker.snapshot(today).unwrap();
    assert!(snapshot.habits.is_empty());
    assert_eq!(snapshot.week_progress, RangeProgress::zero());
    assert!(tracker.store().logs_for_habit(habit.id).unwrap().is_empty());
}

#[test]
fn test_commands_against_store() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let store = SqliteStore::open(temp_file.path()).unwrap();
    let today = date(2024, 6, 5);

    let added = commands::add_habit(
        &store,
        commands::AddParams {
            name: "Stretch".to_string(),
            emoji: String::new(),
            category: Category::Health,
            schedule: "1010100".to_string(),
        },
    )
    .unwrap();
    assert_eq!(added.habit.active_days_per_week, 3);

    let toggled =
        commands::toggle_day(&store, HabitId(added.habit.id), today, today).unwrap();
    assert!(toggled.completed);

    let status = commands::habit_status(&store, None, today).unwrap();
    assert_eq!(status.habits.len(), 1);
    assert_eq!(status.habits[0].current_streak, 1);

    let summary = commands::progress_summary(store, today, today).unwrap();
    assert_eq!(summary.week_progress.total_days, 3);
    assert_eq!(summary.week_progress.completed_days, 1);
}
