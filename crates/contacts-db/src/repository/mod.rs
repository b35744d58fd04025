//! # Repository Module
//!
//! Database repository implementations for My Contacts.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  ContactsLocalDataSource                                               │
//! │       │                                                                 │
//! │       │  db.contacts().get_contact_by_id("A")                          │
//! │       ▼                                                                 │
//! │  ContactRepository                                                     │
//! │  ├── get_all_contacts(&self)                                           │
//! │  ├── get_contact_by_id(&self, id)                                      │
//! │  ├── insert_contact(&self, contact) / insert_contacts(&self, list)     │
//! │  ├── update_contact(&self, contact)                                    │
//! │  └── delete_contact_by_id(&self, id) / delete_all_contacts(&self)      │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ContactRepository`](contact::ContactRepository) - Contact CRUD

pub mod contact;
