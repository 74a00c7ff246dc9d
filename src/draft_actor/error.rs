//! Error types for the Draft actor.

use thiserror::Error;

/// Errors that can occur while editing or submitting a draft.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    /// The requested draft was not found.
    #[error("Draft not found: {0}")]
    NotFound(String),

    /// A required field is missing or an operation is not allowed in the
    /// draft's current state. Carries the customer-facing message the form
    /// shows inline.
    #[error("Validation de la commande: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for DraftError {
    fn from(msg: String) -> Self {
        DraftError::ActorCommunicationError(msg)
    }
}
