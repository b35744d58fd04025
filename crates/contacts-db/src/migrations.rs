//! # Database Migrations
//!
//! Embedded SQL migrations for My Contacts.
//!
//! ## How Migrations Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Migration Process                                  │
//! │                                                                         │
//! │  Database::new()                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table                                          │
//! │       │                                                                 │
//! │       ├── Table doesn't exist? Create it                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Compare embedded migrations vs applied                                │
//! │       │                                                                 │
//! │       └── 001_create_contacts.sql  (schema version 1)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Run pending migrations in order, record in _sqlx_migrations           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The schema is static at version 1. There is no upgrade path yet; a new
//! file in `migrations/sqlite/` with the next sequence number is how one
//! would be added.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Schema version the embedded migrations bring a database to.
pub const SCHEMA_VERSION: i64 = 1;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
///
/// The `sqlx::migrate!()` macro embeds all SQL files at compile time.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Transactional: each migration runs in a transaction
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!(schema_version = SCHEMA_VERSION, "Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Returns `(total_migrations, applied_migrations)` for diagnostics.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = match sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
    {
        Ok(applied) => applied,
        Err(e) if is_missing_tracking_table(&e) => 0,
        Err(e) => return Err(e.into()),
    };

    Ok((total, applied as usize))
}

/// Highest applied migration version, `None` on a fresh database.
pub async fn current_version(pool: &SqlitePool) -> DbResult<Option<i64>> {
    let version = sqlx::query_scalar("SELECT MAX(version) FROM _sqlx_migrations WHERE success = 1")
        .fetch_one(pool)
        .await;

    match version {
        Ok(version) => Ok(version),
        Err(e) if is_missing_tracking_table(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// The tracking table is missing until migrations first run.
fn is_missing_tracking_table(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().contains("no such table"),
        _ => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_status_before_first_run() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();

        assert_eq!(migration_status(db.pool()).await.unwrap(), (1, 0));
        assert_eq!(current_version(db.pool()).await.unwrap(), None);

        run_migrations(db.pool()).await.unwrap();

        assert_eq!(migration_status(db.pool()).await.unwrap(), (1, 1));
        assert_eq!(current_version(db.pool()).await.unwrap(), Some(SCHEMA_VERSION));
    }

    #[tokio::test]
    async fn test_status_on_closed_pool_is_an_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(matches!(
            migration_status(db.pool()).await,
            Err(DbError::ConnectionFailed(_))
        ));
        assert!(matches!(
            current_version(db.pool()).await,
            Err(DbError::ConnectionFailed(_))
        ));
    }
}
