/// Main entry point for the habitgrid CLI
///
/// This file sets up logging, parses command line arguments, resolves the
/// database location, and dispatches to the command layer.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use habitgrid::commands;
use habitgrid::{parse_date, AppError, Category, HabitId, SqliteStore};

/// Get the default database path with a fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".habitgrid");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habitgrid");
            p
        }),
        // 3. User's config directory
        dirs::config_dir().map(|mut p| {
            p.push("habitgrid");
            p
        }),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habitgrid");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                let mut db_path = potential_path.clone();
                db_path.push("habits.db");
                return Ok(db_path);
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habitgrid");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for habitgrid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Print command output as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// Emoji shown in the grid (defaults to the category's)
        #[arg(long, default_value = "")]
        emoji: String,
        /// Category: health, learning, work, personal, social, creativity
        #[arg(long, default_value = "personal")]
        category: String,
        /// Weekly schedule as '1'/'0' per day, Monday first
        #[arg(long, default_value = "1111111")]
        schedule: String,
    },
    /// List all habits
    List,
    /// Toggle a habit's completion on a date
    Log {
        /// Habit id (see 'list')
        habit_id: i64,
        /// Date as yyyy-MM-dd; defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show current and best streaks
    Status {
        /// Limit to one habit id
        #[arg(long)]
        habit_id: Option<i64>,
    },
    /// Show week and month progress
    Summary {
        /// Any date inside the week to summarize; defaults to today
        #[arg(long)]
        week_of: Option<String>,
    },
}

fn print_report<T: Serialize>(report: &T, message: &str, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", message);
    }
    Ok(())
}

fn run(args: Args, store: SqliteStore, today: NaiveDate) -> Result<(), AppError> {
    match args.command {
        Command::Add {
            name,
            emoji,
            category,
            schedule,
        } => {
            let response = commands::add_habit(
                &store,
                commands::AddParams {
                    name,
                    emoji,
                    category: Category::from_name(&category),
                    schedule,
                },
            )?;
            print_report(&response, &response.message, args.json)
        }
        Command::List => {
            let response = commands::list_habits(&store)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.message);
                for habit in &response.habits {
                    println!(
                        "  [{}] {} {} ({}, {})",
                        habit.id, habit.emoji, habit.name, habit.category, habit.schedule
                    );
                }
            }
            Ok(())
        }
        Command::Log { habit_id, date } => {
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => today,
            };
            let response = commands::toggle_day(&store, HabitId(habit_id), date, today)?;
            print_report(&response, &response.message, args.json)
        }
        Command::Status { habit_id } => {
            let response = commands::habit_status(&store, habit_id.map(HabitId), today)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.message);
                for status in &response.habits {
                    println!(
                        "  [{}] {} {}: current {}, best {}",
                        status.habit_id,
                        status.emoji,
                        status.name,
                        status.current_streak,
                        status.best_streak
                    );
                }
            }
            Ok(())
        }
        Command::Summary { week_of } => {
            let anchor = match week_of {
                Some(s) => parse_date(&s)?,
                None => today,
            };
            let response = commands::progress_summary(store, anchor, today)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.message);
                for line in &response.habits {
                    println!(
                        "  {} {:<20} [{}] current {}, best {}",
                        line.emoji,
                        line.name,
                        line.week_cells,
                        line.current_streak,
                        line.best_streak
                    );
                }
            }
            Ok(())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habitgrid={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout clean for command output
        .init();

    // Determine database path
    let db_path = match &args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path.clone()
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let store = SqliteStore::open(&db_path)?;
    let today = Local::now().date_naive();

    run(args, store, today)?;
    Ok(())
}
