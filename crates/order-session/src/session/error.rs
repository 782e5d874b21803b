//! Session-level errors, worded for direct display.

use thiserror::Error;

/// Everything that can go wrong while driving the session. The messages
/// are user-facing; `SubmissionFailed` in particular carries the backend's
/// own rejection text verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Please add at least one item to your order.")]
    EmptyCart,

    #[error("Please provide your name, phone number, and delivery address.")]
    MissingContactInfo,

    #[error("{0}")]
    SubmissionFailed(String),

    #[error("Couldn't load today's menu: {0}")]
    MenuUnavailable(String),

    #[error("Session unavailable: {0}")]
    ActorUnavailable(String),
}
