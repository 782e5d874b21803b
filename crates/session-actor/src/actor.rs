//! # Generic Session Actor
//!
//! This module defines the `SessionActor`, the core component that owns a session's
//! state and processes requests against it. It implements the "Server" side of the
//! Actor Model, handling messages sequentially and ensuring exclusive access to the
//! state.

use crate::client::SessionClient;
use crate::entity::SessionEntity;
use crate::error::ActorError;
use crate::message::SessionRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single session entity.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the receiver
/// end of the channel.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop, so the state needs no
/// `Mutex` or `RwLock`. Sequential processing is also a behavioral guarantee: while an
/// async action (say, a network submission) is in flight, no other request can run, so
/// two effectful operations can never overlap for the same session.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `SessionActor::new(initial_state, buffer)` to get the actor
///     (server) and its `SessionClient` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use session_actor::{SessionActor, SessionEntity};
/// use async_trait::async_trait;
///
/// // Minimal entity definition
/// #[derive(Clone, Debug, Default)] struct Tally { total: i64 }
/// #[derive(Debug)] enum TallyCommand { Add(i64) }
/// #[derive(Debug)] enum TallyAction {}
/// #[derive(Debug, thiserror::Error)] #[error("tally error")] struct TallyError;
///
/// #[async_trait]
/// impl SessionEntity for Tally {
///     type Command = TallyCommand;
///     type Action = TallyAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TallyError;
///
///     fn handle_command(&mut self, command: TallyCommand) -> Result<(), TallyError> {
///         match command { TallyCommand::Add(n) => self.total += n }
///         Ok(())
///     }
///
///     async fn handle_action(&mut self, _: TallyAction, _: &()) -> Result<(), TallyError> {
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     // 1. Create
///     let (actor, client) = SessionActor::new(Tally::default(), 10);
///
///     // 2. Wire & Run
///     tokio::spawn(actor.run(()));
///
///     // 3. Use
///     let state = client.command(TallyCommand::Add(5)).await.unwrap();
///     assert_eq!(state.total, 5);
/// }
/// ```
pub struct SessionActor<T: SessionEntity> {
    receiver: mpsc::Receiver<SessionRequest<T>>,
    state: T,
}

impl<T: SessionEntity> SessionActor<T> {
    /// Creates a new `SessionActor` around `state` and its associated `SessionClient`.
    ///
    /// # Arguments
    ///
    /// * `state` - The initial session state, owned by the actor from here on.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls on the client will wait until there is space.
    pub fn new(state: T, buffer_size: usize) -> (Self, SessionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = SessionClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every action. This allows the entity to
    /// reach external dependencies (an API client, another actor's client) that were
    /// created *after* the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, not the full module path.
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Session actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Snapshot { respond_to } => {
                    debug!(entity_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                SessionRequest::Command {
                    command,
                    respond_to,
                } => {
                    debug!(entity_type, ?command, "Command");
                    match self.state.handle_command(command) {
                        Ok(()) => {
                            let _ = respond_to.send(Ok(self.state.clone()));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Command failed");
                            let _ = respond_to.send(Err(ActorError::EntityError(Box::new(e))));
                        }
                    }
                }
                SessionRequest::Action { action, respond_to } => {
                    debug!(entity_type, ?action, "Action");
                    // Await the async handler; the loop (and thus the session) is
                    // exclusively busy until it resolves.
                    let result = self
                        .state
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| ActorError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, "Action ok"),
                        Err(e) => warn!(entity_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, "Shutdown");
    }
}
