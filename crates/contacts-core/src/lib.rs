//! # contacts-core: Domain Types for My Contacts
//!
//! This crate holds the contact record, the outcome wrapper returned by
//! read operations, and the abstract data-source contract that UI layers
//! consume. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        My Contacts Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI / Caller                                  │   │
//! │  │    list screen ──► detail screen ──► edit screen               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ContactsDataSource (async)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ contacts-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  outcome  │  │   error   │  │  source   │  │   │
//! │  │   │  Contact  │  │  Outcome  │  │ CoreError │  │ contract  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 contacts-db (Database Layer)                    │   │
//! │  │        SQLite, repository, ContactsLocalDataSource              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The [`Contact`] record
//! - [`outcome`] - [`Outcome`], the success/error wrapper for reads
//! - [`error`] - Domain error types
//! - [`source`] - The [`ContactsDataSource`] contract
//!
//! ## Example Usage
//!
//! ```rust
//! use contacts_core::{Contact, Outcome};
//!
//! let contact = Contact::new("contact1", "1234567891");
//! assert!(!contact.id.is_empty());
//!
//! let outcome = Outcome::Success(contact.clone());
//! assert!(outcome.succeeded());
//! assert_eq!(outcome.data(), Some(&contact));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod outcome;
pub mod source;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use outcome::Outcome;
pub use source::ContactsDataSource;
pub use types::*;
