//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `SessionClient` and `SessionActor`.

use crate::entity::SessionEntity;
use crate::error::ActorError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, ActorError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The Snapshot / Command / Action Pattern
/// A session actor owns exactly one value, so the keyed CRUD vocabulary collapses
/// into three operations:
///
/// - **Snapshot**: Observation. Returns a clone of the current state; the presentation
///   layer renders from snapshots, never from shared references.
/// - **Command**: Local mutation. Applies a synchronous [`SessionEntity::Command`]
///   transition and responds with the updated snapshot, so callers see the effect of
///   their own change without a second round trip.
/// - **Action**: Effectful operation. Runs an async [`SessionEntity::Action`] with the
///   injected context and responds with its [`SessionEntity::ActionResult`].
///
/// # Entity Interaction
/// This type is generic over `T: SessionEntity` and uses the trait's associated types,
/// so a command or action for one session type cannot be sent to an actor managing a
/// different one.
#[derive(Debug)]
pub enum SessionRequest<T: SessionEntity> {
    Snapshot {
        respond_to: Response<T>,
    },
    Command {
        command: T::Command,
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
