//! # Generic Client
//!
//! This module defines the generic client for communicating with session actors.

use crate::entity::SessionEntity;
use crate::error::ActorError;
use crate::message::SessionRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `SessionActor`.
///
/// The `SessionClient<T>` forwards Snapshot/Command/Action requests over a Tokio mpsc
/// channel and returns results via oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – all methods return futures resolving to `Result<…, ActorError>`.
/// * **Generic** – works with any type implementing [`SessionEntity`].
#[derive(Clone)]
pub struct SessionClient<T: SessionEntity> {
    sender: mpsc::Sender<SessionRequest<T>>,
}

impl<T: SessionEntity> SessionClient<T> {
    pub fn new(sender: mpsc::Sender<SessionRequest<T>>) -> Self {
        Self { sender }
    }

    /// Fetch a clone of the current session state.
    pub async fn snapshot(&self) -> Result<T, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Snapshot { respond_to })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)?
    }

    /// Apply a synchronous state transition; resolves to the updated snapshot.
    pub async fn command(&self, command: T::Command) -> Result<T, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Command {
                command,
                respond_to,
            })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)?
    }

    /// Run an asynchronous action against the actor's injected context.
    pub async fn perform_action(&self, action: T::Action) -> Result<T::ActionResult, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Action { action, respond_to })
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)?
    }
}
