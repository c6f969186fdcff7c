//! Cross-cutting error types for Novito.
//!
//! Errors that can originate from any crate that handles core types.
//! Transport errors live in `novito-gateway`, view errors in `novito-views`;
//! the CLI converges on `anyhow`.

use thiserror::Error;

/// Errors that can be raised while handling core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A role id outside the closed role set.
    #[error("Unknown role: '{0}'")]
    UnknownRole(String),

    /// A string that names no variant of a closed enum.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        from: String,
        to: String,
    },

    /// Data failed validation before being sent anywhere.
    #[error("Validation error: {0}")]
    Validation(String),
}
