/// Public library interface for habitgrid
///
/// This module exports the domain types, the pure progress engine, the
/// storage layer, and the tracker that ties them together for the CLI
/// and for tests.

use thiserror::Error;

// Internal modules
pub mod commands;
pub mod domain;
pub mod progress;
pub mod storage;
pub mod tracker;

// Re-export public types
pub use domain::*;
pub use progress::*;
pub use storage::{HabitStore, SqliteStore, StorageError};
pub use tracker::{HabitTracker, TrackerSnapshot};

/// Errors that can occur during application operation
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
