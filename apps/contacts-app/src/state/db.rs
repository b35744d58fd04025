//! # Database State
//!
//! Shares the process [`DatabaseContainer`] with everything that needs
//! storage.
//!
//! ## Thread Safety
//! The container sits behind an `Arc`; the database inside it wraps a
//! `SqlitePool`, which is thread-safe. Clones of `DbState` share one
//! database.

use std::sync::Arc;

use contacts_db::{ContactsLocalDataSource, Database, DatabaseContainer, DbConfig, DbResult};

/// Handle to the shared database container.
#[derive(Debug, Clone)]
pub struct DbState {
    container: Arc<DatabaseContainer>,
}

impl DbState {
    /// Wraps a container built from `config`. Nothing is opened yet.
    pub fn new(config: DbConfig) -> Self {
        DbState {
            container: Arc::new(DatabaseContainer::new(config)),
        }
    }

    /// Returns the database, opening it on first use.
    pub async fn database(&self) -> DbResult<&Database> {
        self.container.get().await
    }

    /// A data source over the shared database.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let source = state.db.data_source().await?;
    /// let contacts = source.get_contacts().await;
    /// ```
    pub async fn data_source(&self) -> DbResult<ContactsLocalDataSource> {
        self.container.local_data_source().await
    }

    /// Closes the shared database, if it was opened.
    pub async fn close(&self) {
        self.container.close().await;
    }
}
