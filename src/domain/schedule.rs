/// Weekly schedule for a habit
///
/// This module defines the WeekSchedule type: which of the seven weekdays a
/// habit is expected to be performed on, with the storage codec used to
/// persist schedules as compact strings.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Which weekdays a habit is active on
///
/// Always exactly 7 entries, index 0 = Monday through index 6 = Sunday.
/// Every schedule-aware count in the progress engine goes through this
/// type, so the Monday-first indexing here is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule([bool; 7]);

impl WeekSchedule {
    /// Schedule with the given active flags, Monday first
    pub fn new(days: [bool; 7]) -> Self {
        Self(days)
    }

    /// Schedule active on all seven days
    pub fn every_day() -> Self {
        Self([true; 7])
    }

    /// Schedule active on no days
    pub fn no_days() -> Self {
        Self([false; 7])
    }

    /// Schedule active Monday through Friday
    pub fn weekdays() -> Self {
        Self([true, true, true, true, true, false, false])
    }

    /// Whether the habit is scheduled for the given weekday
    ///
    /// chrono's `num_days_from_monday` already yields the 0-based
    /// Monday-first index this type is built around.
    pub fn is_active_on(&self, weekday: Weekday) -> bool {
        self.0[weekday.num_days_from_monday() as usize]
    }

    /// Whether the habit is scheduled for the given calendar date
    pub fn is_active_on_date(&self, date: NaiveDate) -> bool {
        self.is_active_on(date.weekday())
    }

    /// Number of active days per week (0..=7)
    pub fn active_day_count(&self) -> u32 {
        self.0.iter().filter(|&&active| active).count() as u32
    }

    /// Encode as a 7-character '1'/'0' string, Monday through Sunday
    pub fn to_storage_string(&self) -> String {
        self.0
            .iter()
            .map(|&active| if active { '1' } else { '0' })
            .collect()
    }

    /// Decode a stored schedule string
    ///
    /// Missing trailing characters default to '1' (active): legacy rows
    /// were written before the full 7-day encoding and assumed every-day
    /// habits. Any character other than '1' counts as inactive. This
    /// never fails; malformed input normalizes rather than erroring.
    pub fn from_storage_string(s: &str) -> Self {
        let mut days = [true; 7];
        for (i, c) in s.chars().take(7).enumerate() {
            days[i] = c == '1';
        }
        Self(days)
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::every_day()
    }
}

impl std::fmt::Display for WeekSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let mut first = true;
        for (i, &active) in self.0.iter().enumerate() {
            if active {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", LABELS[i])?;
                first = false;
            }
        }
        if first {
            write!(f, "(none)")?;
        }
        Ok(())
    }
}
