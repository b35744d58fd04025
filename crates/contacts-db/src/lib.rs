//! # contacts-db: Database Layer for My Contacts
//!
//! This crate provides local storage for contacts.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        My Contacts Data Flow                            │
//! │                                                                         │
//! │  UI: source.get_contacts().await                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   contacts-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐   ┌───────────────────┐               │   │
//! │  │   │ DatabaseContainer  │──►│     Database      │               │   │
//! │  │   │  (container.rs)    │   │    (pool.rs)      │               │   │
//! │  │   └────────────────────┘   └─────────┬─────────┘               │   │
//! │  │                                      │ contacts()               │   │
//! │  │   ┌────────────────────┐   ┌─────────▼─────────┐  ┌─────────┐ │   │
//! │  │   │ ContactsLocal-     │──►│ ContactRepository │  │ 001_... │ │   │
//! │  │   │ DataSource         │   │ (repository/)     │  │ (embed) │ │   │
//! │  │   │ (source.rs)        │   └───────────────────┘  └─────────┘ │   │
//! │  │   └────────────────────┘                                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite: contacts_database.db                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migration
//! - [`error`] - Database error types
//! - [`repository`] - The contact repository (data access layer)
//! - [`source`] - [`ContactsLocalDataSource`]
//! - [`container`] - [`DatabaseContainer`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contacts_core::{Contact, ContactsDataSource};
//! use contacts_db::{DatabaseContainer, DbConfig};
//!
//! let container = DatabaseContainer::new(DbConfig::new("contacts_database.db"));
//! let source = container.local_data_source().await?;
//!
//! source.save_contact(&Contact::new("contact1", "1234567891")).await?;
//! let contacts = source.get_contacts().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod container;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod source;

// =============================================================================
// Re-exports
// =============================================================================

pub use container::DatabaseContainer;
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, DEFAULT_DB_FILE_NAME};
pub use repository::contact::ContactRepository;
pub use source::ContactsLocalDataSource;
