//! Domain-level errors.
//!
//! These errors represent malformed domain input. They are independent of
//! infrastructure concerns (database, SMTP).

use thiserror::Error;

/// Domain-specific errors for malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required entity reference was blank
    #[error("{field} is required")]
    MissingReference { field: &'static str },

    /// An entity reference is not a valid identifier
    #[error("{field} is not a valid id: {value}")]
    InvalidReference { field: &'static str, value: String },
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
