//! # Domain Types
//!
//! The contact record persisted in the `contacts` table.
//!
//! ## Table Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Contact (Rust)            contacts (SQLite)                            │
//! │  ──────────────            ─────────────────                            │
//! │  id      : String   ◄────► entryId  TEXT PRIMARY KEY                    │
//! │  name    : String   ◄────► name     TEXT                                │
//! │  mobile  : String   ◄────► mobile   TEXT                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The id is a UUID v4 when the caller does not supply one. Ids supplied by
//! callers are stored as-is; any string is a valid key.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Contact
// =============================================================================

/// A single contact entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Contact {
    /// Display name.
    pub name: String,

    /// Mobile number, stored verbatim.
    pub mobile: String,

    /// Unique identifier (primary key).
    #[cfg_attr(feature = "sqlx", sqlx(rename = "entryId"))]
    pub id: String,
}

impl Contact {
    /// Creates a contact with a freshly generated id.
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Contact::with_id(name, mobile, generate_contact_id())
    }

    /// Creates a contact with a caller-supplied id.
    ///
    /// Saving a contact whose id already exists replaces the stored row.
    pub fn with_id(
        name: impl Into<String>,
        mobile: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Contact {
            name: name.into(),
            mobile: mobile.into(),
            id: id.into(),
        }
    }
}

/// Generates a new contact ID.
pub fn generate_contact_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
