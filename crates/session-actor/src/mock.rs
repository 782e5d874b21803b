//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out the same `SessionClient<T>` as the production
//! actor but operates entirely in-memory. It lets you set expectations and canned
//! responses for unit tests, enabling fast, deterministic testing of client logic
//! without spawning any real actor.
//!
//! ## When to use Mocks vs a Real Actor
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the entity itself or the full session |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! Three patterns cover almost everything:
//!
//! - **Client logic test (pure mock)**: queue expectations on a `MockClient`, hand its
//!   `client()` to your wrapper, assert the wrapper's mapping logic.
//! - **Entity test (real actor, fake context)**: spawn a real `SessionActor` and inject
//!   a fake implementation of the context trait. This exercises the entity's actual
//!   command/action handlers without touching the outside world.
//! - **Full session test**: wire the real lifecycle orchestrator with a fake context
//!   and drive end-to-end flows.
//!
//! ## Channel-level helpers
//!
//! For tests that want to assert on the *raw request* (not just respond to it), use
//! [`create_mock_client`] together with [`expect_command`] / [`expect_action`] /
//! [`expect_snapshot`]: they give you the request payload and the responder so the
//! test plays the actor's role explicitly.

use crate::client::SessionClient;
use crate::entity::SessionEntity;
use crate::error::ActorError;
use crate::message::SessionRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: SessionEntity> {
    Snapshot {
        response: Result<T, ActorError>,
    },
    Command {
        response: Result<T, ActorError>,
    },
    Action {
        response: Result<T::ActionResult, ActorError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<OrderSession>::new();
/// mock.expect_command().return_ok(updated_state);
/// mock.expect_action().return_err(ActorError::ActorClosed);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: SessionEntity> {
    client: SessionClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: SessionEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SessionEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SessionRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task plays the actor: pop the next expectation per request.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before responding

                match (request, expectation) {
                    (
                        SessionRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Command {
                            command: _,
                            respond_to,
                        },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Action {
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: SessionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> SessionClient<T> {
        self.client.clone()
    }

    /// Expects a `snapshot` operation.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `command` operation.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<T> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: SessionEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: SessionEntity> SnapshotExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, state: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Ok(state),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ActorError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Err(error),
        });
    }
}

/// Builder for `command` expectations.
pub struct CommandExpectationBuilder<T: SessionEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: SessionEntity> CommandExpectationBuilder<T> {
    /// Sets the expectation to return the updated snapshot.
    pub fn return_ok(self, state: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Command {
            response: Ok(state),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ActorError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Command {
            response: Err(error),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: SessionEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: SessionEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            response: Ok(result),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ActorError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In tests of client wrappers we don't want to spin up a full `SessionActor` if we
/// are just testing the *client* logic. This client sends messages to a channel the
/// test controls; the test inspects the arriving requests and plays the actor's role,
/// simulating success, failure, or delay deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: SessionEntity>(
    buffer_size: usize,
) -> (SessionClient<T>, mpsc::Receiver<SessionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<tokio::sync::oneshot::Sender<Result<T, ActorError>>> {
    match receiver.recv().await {
        Some(SessionRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Command request
pub async fn expect_command<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(
    T::Command,
    tokio::sync::oneshot::Sender<Result<T, ActorError>>,
)> {
    match receiver.recv().await {
        Some(SessionRequest::Command {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, ActorError>>,
)> {
    match receiver.recv().await {
        Some(SessionRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::SessionEntity;
    use async_trait::async_trait;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tally {
        total: i64,
    }

    #[derive(Debug)]
    enum TallyCommand {
        Add(i64),
    }

    #[derive(Debug)]
    enum TallyAction {
        Reset,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tally error")]
    struct TallyError;

    #[async_trait]
    impl SessionEntity for Tally {
        type Command = TallyCommand;
        type Action = TallyAction;
        type ActionResult = i64;
        type Context = ();
        type Error = TallyError;

        fn handle_command(&mut self, command: TallyCommand) -> Result<(), TallyError> {
            match command {
                TallyCommand::Add(n) => self.total += n,
            }
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: TallyAction,
            _ctx: &Self::Context,
        ) -> Result<i64, TallyError> {
            match action {
                TallyAction::Reset => {
                    let previous = self.total;
                    self.total = 0;
                    Ok(previous)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Tally>(10);

        // Test Command
        let command_task =
            tokio::spawn(async move { client.command(TallyCommand::Add(7)).await });

        let (command, responder) = expect_command(&mut receiver)
            .await
            .expect("Expected Command request");
        assert!(matches!(command, TallyCommand::Add(7)));
        responder.send(Ok(Tally { total: 7 })).unwrap();

        let result = command_task.await.unwrap();
        assert!(matches!(result, Ok(state) if state.total == 7));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        // Create mock with fluent expectation API
        let mut mock = MockClient::<Tally>::new();

        // Set up expectations
        mock.expect_command().return_ok(Tally { total: 3 });
        mock.expect_action().return_ok(3);
        mock.expect_snapshot().return_ok(Tally { total: 0 });

        let client = mock.client();

        // Execute operations
        let state = client.command(TallyCommand::Add(3)).await.unwrap();
        assert_eq!(state.total, 3);

        let previous = client.perform_action(TallyAction::Reset).await.unwrap();
        assert_eq!(previous, 3);

        let fresh = client.snapshot().await.unwrap();
        assert_eq!(fresh.total, 0);

        // Verify all expectations were met
        mock.verify();
    }
}
