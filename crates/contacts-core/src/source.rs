//! # Data-Source Contract
//!
//! The asynchronous contract UI layers program against. `contacts-db`
//! provides the SQLite-backed implementation (`ContactsLocalDataSource`).
//!
//! ## Error Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Reads                          Mutations                              │
//! │  ─────                          ─────────                              │
//! │  get_contacts  → Outcome        save_contact(s)     → CoreResult<()>   │
//! │  get_contact   → Outcome        update_contact      → CoreResult<()>   │
//! │                                 delete_contact      → CoreResult<()>   │
//! │                                 delete_all_contacts → CoreResult<()>   │
//! │                                                                         │
//! │  Reads fold every failure into Outcome::Error.                         │
//! │  Mutations hand failures back to the caller to propagate with `?`.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Updates and deletes whose id matches nothing are not errors.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::outcome::Outcome;
use crate::types::Contact;

/// Abstract source of contacts (local database today).
#[async_trait]
pub trait ContactsDataSource: Send + Sync {
    /// Returns every stored contact, in insertion order.
    /// An empty store yields `Success(vec![])`.
    async fn get_contacts(&self) -> Outcome<Vec<Contact>>;

    /// Returns the contact with the given id, or
    /// `Error(CoreError::ContactNotFound)` when none matches.
    async fn get_contact(&self, contact_id: &str) -> Outcome<Contact>;

    /// Stores a contact, replacing any row with the same id.
    async fn save_contact(&self, contact: &Contact) -> CoreResult<()>;

    /// Stores several contacts, replacing rows with matching ids.
    async fn save_contacts(&self, contacts: &[Contact]) -> CoreResult<()>;

    /// Overwrites name and mobile of the contact with the same id.
    async fn update_contact(&self, contact: &Contact) -> CoreResult<()>;

    /// Removes the contact with the given id.
    async fn delete_contact(&self, contact_id: &str) -> CoreResult<()>;

    /// Removes every contact.
    async fn delete_all_contacts(&self) -> CoreResult<()>;
}
