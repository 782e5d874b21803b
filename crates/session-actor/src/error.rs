//! # Actor Errors
//!
//! This module defines the common error types used throughout the session actor
//! plumbing. By centralizing error definitions, we ensure consistent error handling
//! across all actors and clients.

/// Errors that can occur within the actor plumbing itself.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl ActorError {
    /// Attempt to recover the typed entity error carried by `EntityError`.
    ///
    /// Returns `Err(self)` unchanged when the boxed error is of a different type
    /// (or when the error is a channel failure).
    pub fn downcast_entity<E: std::error::Error + Send + Sync + 'static>(
        self,
    ) -> Result<E, Self> {
        match self {
            ActorError::EntityError(boxed) => boxed
                .downcast::<E>()
                .map(|e| *e)
                .map_err(ActorError::EntityError),
            other => Err(other),
        }
    }
}
