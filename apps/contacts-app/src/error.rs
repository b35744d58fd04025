//! # Application Error Type
//!
//! Startup failures. Runtime failures of the data source are reported
//! through `Outcome` / `CoreError` and never reach this type.

use thiserror::Error;

use contacts_db::DbError;

use crate::state::ConfigError;

/// Errors that stop the application from starting.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The database could not be opened or migrated.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// The data directory could not be created.
    #[error("Cannot prepare data directory: {0}")]
    DataDir(#[from] std::io::Error),
}

/// Result type for application startup.
pub type AppResult<T> = Result<T, AppError>;
