//! # My Contacts Application Library
//!
//! Wires configuration, logging and storage together for the contacts
//! application. The UI layer receives an [`AppState`] and talks to the
//! store only through `ContactsDataSource`.
//!
//! ## Module Organization
//! ```text
//! contacts_app/
//! ├── lib.rs          ◄── You are here (bootstrap, tracing)
//! ├── main.rs         ◄── Binary entry point
//! ├── error.rs        ◄── Startup error type
//! └── state/
//!     ├── mod.rs      ◄── AppState
//!     ├── config.rs   ◄── Environment-driven configuration
//!     └── db.rs       ◄── Shared database container
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (logging)
//! 3. Make sure the data directory exists
//! 4. Open the database & run migrations (first access to the container)
//! 5. Hand out `AppState`

pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use contacts_core::ContactsDataSource;

pub use error::{AppError, AppResult};
pub use state::{AppState, ConfigError, ConfigState, DbState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=contacts_db=trace` - Show trace for the storage crate only
/// - Default: `fallback` (normally [`state::DEFAULT_LOG_FILTER`])
///
/// Calling this more than once keeps the first subscriber.
pub fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Builds the application state from `config`.
///
/// Creates the parent directory of the database file and opens the
/// database eagerly, so a broken setup fails at startup rather than on the
/// first screen.
pub async fn bootstrap(config: ConfigState) -> AppResult<AppState> {
    if let Some(parent) = config
        .database_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)?;
    }

    info!(path = %config.database_path.display(), "Opening contacts database");

    let db = DbState::new(config.db_config());
    db.database().await?;

    Ok(AppState { config, db })
}

/// Runs the application: loads config, opens the store and reports what
/// it holds.
pub async fn run() -> AppResult<()> {
    let config = ConfigState::from_env()?;
    init_tracing(&config.log_filter);

    let app = bootstrap(config).await?;

    let source = app.db.data_source().await?;
    match source.get_contacts().await.into_result() {
        Ok(contacts) => info!(count = contacts.len(), "Contacts store ready"),
        Err(e) => tracing::warn!(error = %e, "Contacts store opened but could not be read"),
    }

    app.db.close().await;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use contacts_core::{Contact, Outcome};

    use super::*;

    fn config_at(path: std::path::PathBuf) -> ConfigState {
        ConfigState {
            database_path: path,
            max_connections: 2,
            log_filter: state::DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing("warn");
        init_tracing("debug");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_bootstrap_creates_data_dir_and_opens_db() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("contacts_database.db");

        let app = bootstrap(config_at(path.clone())).await.unwrap();

        assert!(path.exists());
        let source = app.db.data_source().await.unwrap();
        assert_eq!(source.get_contacts().await, Outcome::Success(vec![]));

        app.db.close().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_state_clones_share_database() {
        let dir = tempfile::tempdir().unwrap();
        let app = bootstrap(config_at(dir.path().join("contacts.db")))
            .await
            .unwrap();
        let other = app.clone();

        let contact = Contact::new("contact1", "1234567891");
        app.db
            .data_source()
            .await
            .unwrap()
            .save_contact(&contact)
            .await
            .unwrap();

        let found = other
            .db
            .data_source()
            .await
            .unwrap()
            .get_contact(&contact.id)
            .await;
        assert_eq!(found, Outcome::Success(contact));

        app.db.close().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_bootstrap_reports_database_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the database file should be.
        let blocker = dir.path().join("taken.db");
        std::fs::create_dir_all(&blocker).unwrap();

        let err = bootstrap(config_at(blocker)).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
