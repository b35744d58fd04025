//! # Database Container
//!
//! Owns the one [`Database`] a process uses, built lazily on first access.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    DatabaseContainer                                    │
//! │                                                                         │
//! │  DatabaseContainer::new(config)      ← cheap, nothing is opened yet    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  container.get().await  (first call)                                   │
//! │       │   OnceCell::get_or_try_init                                     │
//! │       │   ├── concurrent callers wait on the same initialization       │
//! │       │   └── on failure the cell stays empty; the next call retries   │
//! │       ▼                                                                 │
//! │  &Database  (every later call returns the same handle)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The container is an ordinary value: construct it once at startup and
//! share it (by reference or `Arc`) with whatever needs storage.

use tokio::sync::OnceCell;
use tracing::info;

use crate::error::DbResult;
use crate::pool::{Database, DbConfig};
use crate::repository::contact::ContactRepository;
use crate::source::ContactsLocalDataSource;

/// Lazily-built, construct-once holder for the process database.
#[derive(Debug)]
pub struct DatabaseContainer {
    config: DbConfig,
    database: OnceCell<Database>,
}

impl DatabaseContainer {
    /// Creates an empty container. The database is opened on first `get()`.
    pub fn new(config: DbConfig) -> Self {
        DatabaseContainer {
            config,
            database: OnceCell::new(),
        }
    }

    /// Returns the database, building it on first access.
    pub async fn get(&self) -> DbResult<&Database> {
        self.database
            .get_or_try_init(|| async {
                info!(
                    path = %self.config.database_path.display(),
                    "Building contacts database"
                );
                Database::new(self.config.clone()).await
            })
            .await
    }

    /// Returns the database only if it has already been built.
    pub fn get_if_initialized(&self) -> Option<&Database> {
        self.database.get()
    }

    /// Configuration the database is (or will be) built with.
    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Contact repository over the shared database.
    pub async fn contacts(&self) -> DbResult<ContactRepository> {
        Ok(self.get().await?.contacts())
    }

    /// Local data source over the shared database, dispatching onto the
    /// current tokio runtime.
    pub async fn local_data_source(&self) -> DbResult<ContactsLocalDataSource> {
        Ok(ContactsLocalDataSource::new(self.contacts().await?))
    }

    /// Closes the pool if the database was built. The container cannot be
    /// re-opened afterwards.
    pub async fn close(&self) {
        if let Some(db) = self.database.get() {
            db.close().await;
        }
    }
}
