//! Cross-cutting error types for Cohort.
//!
//! Transport errors (`AuthError`, `DataError`) live in their respective crates.
//! Group-list assembly has no error type: missing relational data degrades to
//! empty fields instead of failing.

use thiserror::Error;

/// Errors that can be raised by any Cohort crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// User-supplied data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
