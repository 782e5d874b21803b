//! # EntityClient Trait
//!
//! Provides a common interface for session-specific clients, adding a default
//! `snapshot` method built on top of the generic `SessionClient`.

use crate::{ActorError, SessionClient, SessionEntity};
use async_trait::async_trait;

/// Trait for session-specific clients to inherit the standard observation API.
///
/// This trait reduces boilerplate by providing a default implementation for
/// `snapshot`, while each wrapper keeps its own domain-typed error.
///
/// # Example
///
/// ```rust
/// use session_actor::{ActorError, EntityClient, SessionClient, SessionEntity};
/// use async_trait::async_trait;
///
/// // 1. Define a minimal entity
/// #[derive(Clone, Debug, Default)]
/// struct Draft { body: String }
/// #[derive(Debug)] enum DraftCommand { Append(String) }
/// #[derive(Debug)] enum DraftAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("draft error: {0}")]
/// struct DraftError(String);
///
/// #[async_trait]
/// impl SessionEntity for Draft {
///     type Command = DraftCommand;
///     type Action = DraftAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = DraftError;
///
///     fn handle_command(&mut self, command: DraftCommand) -> Result<(), DraftError> {
///         match command { DraftCommand::Append(s) => self.body.push_str(&s) }
///         Ok(())
///     }
///     async fn handle_action(&mut self, _: DraftAction, _: &()) -> Result<(), DraftError> {
///         Ok(())
///     }
/// }
///
/// // 2. Define the client wrapper
/// struct DraftClient { inner: SessionClient<Draft> }
///
/// // 3. Implement EntityClient
/// #[async_trait]
/// impl EntityClient<Draft> for DraftClient {
///     type Error = DraftError;
///
///     fn inner(&self) -> &SessionClient<Draft> {
///         &self.inner
///     }
///
///     fn map_error(e: ActorError) -> Self::Error {
///         DraftError(e.to_string())
///     }
/// }
///
/// // 4. Usage: snapshot() is provided automatically
/// async fn usage(client: DraftClient) {
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait EntityClient<T: SessionEntity>: Send + Sync {
    /// The session-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic SessionClient.
    fn inner(&self) -> &SessionClient<T>;

    /// Map actor-plumbing errors to the specific session error type.
    fn map_error(e: ActorError) -> Self::Error;

    /// Fetch a clone of the current session state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
