/// Progress engine: pure derivations over habits and their logs
///
/// This module contains the only non-trivial logic in the system: streak
/// detection and schedule-aware completion percentages for arbitrary date
/// ranges, weeks, and calendar months. Every function here is a pure,
/// stateless computation; the current date is always an explicit argument
/// and all results are recomputed fresh on demand.

pub mod aggregate;
pub mod range;
pub mod streak;

pub use aggregate::*;
pub use range::*;
pub use streak::*;
