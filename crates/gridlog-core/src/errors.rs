//! Cross-cutting error types for Gridlog.
//!
//! Domain-specific errors (e.g. `ApiError`, `ConfigError`) are defined in
//! their respective crates; this module holds only the errors that core
//! types themselves can raise.

use thiserror::Error;

/// Errors raised by core domain types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A workflow transition was attempted that the state machine forbids.
    #[error("invalid report transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// A role string outside the known vocabulary.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A report status string outside the known vocabulary.
    #[error("unknown report status: {0}")]
    UnknownStatus(String),

    /// Data failed validation (format, constraints).
    #[error("validation error: {0}")]
    Validation(String),
}
