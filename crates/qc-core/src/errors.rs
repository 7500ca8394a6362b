//! Cross-cutting error types for the QC board.
//!
//! Store and export failures are defined in their own crates. The CLI
//! converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors raised while applying commands to a board.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A command referenced an entity that does not exist.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A status transition was rejected by the board policy.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn rule_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "rule".to_string(),
            id: id.to_string(),
        }
    }

    pub(crate) fn thread_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "thread".to_string(),
            id: id.to_string(),
        }
    }
}
