//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// No record of the given kind has the requested id.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Human-readable record kind, e.g. `Blog`.
        kind: &'static str,
        /// The id that was requested.
        id: u32,
    },

    /// Two records in one collection share an id.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId {
        /// Human-readable record kind.
        kind: &'static str,
        /// The id that appears more than once.
        id: u32,
    },

    /// Content failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure error, such as an unreadable content file.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
