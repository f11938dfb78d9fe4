/// Streak calculation over a habit's completion history
///
/// This module derives the current and best consecutive-day streaks from
/// the list of dates a habit was marked completed.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Current and best consecutive-completion streaks for one habit
///
/// Recomputed on demand from the completion history; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive completed days counting back from today with no gap
    pub current_streak: u32,
    /// Longest run of consecutive completed days anywhere in the history
    pub best_streak: u32,
}

impl StreakSummary {
    pub fn zero() -> Self {
        Self {
            current_streak: 0,
            best_streak: 0,
        }
    }
}

/// Compute current and best streaks from a habit's completed dates
///
/// `completed_dates` must contain only dates marked completed, sorted
/// descending (newest first) with no duplicates; that is the shape
/// `completed_dates_descending` produces. `today` is injected rather than
/// read from the clock so the result is deterministic.
///
/// The current streak walks backward from `today`: each date that matches
/// the expected day extends the chain; the first date strictly older than
/// expected means a day was never logged and the chain ends. The best
/// streak scans adjacent pairs of the full history, extending a run while
/// consecutive dates differ by exactly one day. The final best is the
/// maximum of the scan's best, its last open run, and the current streak,
/// which guarantees `best_streak >= current_streak`.
pub fn compute_streaks(completed_dates: &[NaiveDate], today: NaiveDate) -> StreakSummary {
    if completed_dates.is_empty() {
        return StreakSummary::zero();
    }

    // Current streak: from today backwards
    let mut current_streak: u32 = 0;
    let mut check_date = today;

    for &log_date in completed_dates {
        if log_date == check_date {
            current_streak += 1;
            check_date -= Duration::days(1);
        } else if log_date < check_date {
            // There's a gap, streak ends
            break;
        }
        // Dates newer than check_date (future-dated logs) are skipped
    }

    // Best historical streak: pairwise scan of the descending list
    let mut best_streak: u32 = 0;
    let mut run: u32 = 1;

    for pair in completed_dates.windows(2) {
        let diff = pair[0].signed_duration_since(pair[1]).num_days();
        if diff == 1 {
            run += 1;
            best_streak = best_streak.max(run);
        } else {
            run = 1;
        }
    }

    best_streak = best_streak.max(run).max(current_streak);

    StreakSummary {
        current_streak,
        best_streak,
    }
}
