/// Core types used throughout the domain layer
///
/// This module defines the fundamental types like HabitId and Category
/// that are used by Habit, DailyLog, and other domain entities.

use serde::{Deserialize, Serialize};

/// Unique identifier for a habit
///
/// This is a wrapper around the SQLite row id to provide type safety - you
/// can't accidentally pass a raw log id where a habit id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HabitId(pub i64);

impl HabitId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Categories for organizing habits into different life areas
///
/// Each category carries a display color and a default emoji used by
/// rendering layers. Unknown category names decode to Personal so legacy
/// rows never fail to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Exercise, diet, sleep
    Health,
    /// Studying and skill building
    Learning,
    /// Career and professional habits
    Work,
    /// Personal growth and self-care
    Personal,
    /// Relationship and communication habits
    Social,
    /// Art, writing, music
    Creativity,
}

impl Category {
    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Learning => "Learning",
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Social => "Social",
            Category::Creativity => "Creativity",
        }
    }

    /// Hex color associated with this category
    pub fn color_hex(&self) -> &'static str {
        match self {
            Category::Health => "#10b981",
            Category::Learning => "#3b82f6",
            Category::Work => "#f97316",
            Category::Personal => "#8b5cf6",
            Category::Social => "#ec4899",
            Category::Creativity => "#f59e0b",
        }
    }

    /// Default emoji for habits in this category
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Health => "💪",
            Category::Learning => "🧠",
            Category::Work => "💼",
            Category::Personal => "🎯",
            Category::Social => "👥",
            Category::Creativity => "🎨",
        }
    }

    /// All categories in display order
    pub fn all() -> [Category; 6] {
        [
            Category::Health,
            Category::Learning,
            Category::Work,
            Category::Personal,
            Category::Social,
            Category::Creativity,
        ]
    }

    /// Decode a stored category name, falling back to Personal for
    /// anything unrecognized
    pub fn from_name(name: &str) -> Category {
        match name.to_ascii_lowercase().as_str() {
            "health" => Category::Health,
            "learning" => Category::Learning,
            "work" => Category::Work,
            "social" => Category::Social,
            "creativity" => Category::Creativity,
            _ => Category::Personal,
        }
    }

    /// Stable lowercase name used for storage
    pub fn storage_name(&self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Learning => "learning",
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Social => "social",
            Category::Creativity => "creativity",
        }
    }
}
