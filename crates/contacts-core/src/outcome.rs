//! # Outcome
//!
//! Two-variant wrapper returned by data-source reads.
//!
//! Reads never panic or return `Err` across the data-source boundary; they
//! hand back an [`Outcome`] instead, and the caller decides how to present
//! an error.
//!
//! ```rust
//! use contacts_core::{CoreError, Outcome};
//!
//! let found: Outcome<u32> = Outcome::Success(3);
//! let missing: Outcome<u32> = Outcome::Error(CoreError::ContactNotFound("A".into()));
//!
//! assert!(found.succeeded());
//! assert!(!missing.succeeded());
//! assert_eq!(missing.to_string(), "Error[cause=Contact not found: A]");
//! ```

use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Result of a data-source read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The read succeeded with a payload.
    Success(T),
    /// The read failed; carries the cause.
    Error(CoreError),
}

impl<T> Outcome<T> {
    /// True only for `Success`.
    pub fn succeeded(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Borrows the payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Error(_) => None,
        }
    }

    /// Borrows the error cause, if any.
    pub fn error(&self) -> Option<&CoreError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Error(err) => Some(err),
        }
    }

    /// Maps the success payload.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Error(err) => Outcome::Error(err),
        }
    }

    /// Converts into a std `Result` so callers can use `?`.
    pub fn into_result(self) -> CoreResult<T> {
        self.into()
    }
}

impl<T> From<CoreResult<T>> for Outcome<T> {
    fn from(result: CoreResult<T>) -> Self {
        match result {
            Ok(data) => Outcome::Success(data),
            Err(err) => Outcome::Error(err),
        }
    }
}

impl<T> From<Outcome<T>> for CoreResult<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(data) => Ok(data),
            Outcome::Error(err) => Err(err),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(data) => write!(f, "Success[data={data:?}]"),
            Outcome::Error(err) => write!(f, "Error[cause={err}]"),
        }
    }
}
