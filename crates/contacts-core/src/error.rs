//! # Error Types
//!
//! Domain-specific error types for contacts-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  contacts-core errors (this file)                                      │
//! │  └── CoreError        - What data-source callers see                   │
//! │                                                                         │
//! │  contacts-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Flow: sqlx::Error → DbError → CoreError → Outcome::Error / Err(..)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are only two failure causes at the data-source boundary: a lookup
//! that matched nothing, and anything the storage layer reported.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced through the data-source contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No contact matched the requested id.
    ///
    /// ## When This Occurs
    /// - The id was never saved
    /// - The contact was deleted
    /// - The id is empty
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The storage layer failed; carries the underlying message.
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl CoreError {
    /// Returns true for the synthetic not-found cause.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::ContactNotFound(_))
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
