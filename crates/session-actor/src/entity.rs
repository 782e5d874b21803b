//! # SessionEntity Trait
//!
//! The `SessionEntity` trait defines the contract that a piece of session state must
//! implement to be managed by the generic `SessionActor`. It specifies associated types
//! for commands, actions, context, and errors, splitting the entity's behavior into
//! synchronous state transitions (`handle_command`) and asynchronous operations that
//! need external collaborators (`handle_action`).
//!
//! # Architecture Note
//! Why two handler methods instead of one?
//! Most of a session's life is cheap, infallible bookkeeping: adjusting a quantity,
//! editing a form field, clearing a flag. Forcing those through an async handler would
//! blur the line between "pure transition" and "operation with side effects". Keeping
//! `handle_command` synchronous makes that line a compile-time fact: a command *cannot*
//! touch the network, because it never sees the context.
//!
//! We use "Associated Types" (type Command, type Action, etc.) to enforce type safety.
//! A session entity only accepts its own command and action enums; the compiler rejects
//! anything else before it can reach the actor loop.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that a session state type must implement to be managed by `SessionActor`.
///
/// # Async & Context
/// `handle_action` is `#[async_trait]` to allow network round trips and other async
/// work. The `Context` type is injected into every action; dependencies are passed to
/// `run()` instead of the constructor ("Late Binding"), so the entity can be built
/// before its collaborators exist.
#[async_trait]
pub trait SessionEntity: Clone + Send + Sync + 'static {
    /// Enum of synchronous, local state transitions (no I/O allowed by construction).
    type Command: Send + Sync + Debug;

    /// Enum of asynchronous operations that may use the injected context.
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    /// One error enum per entity rather than one per operation. The enum is the union
    /// of everything the session can fail with, which keeps client code down to a
    /// single `match` at the cost of some theoretical precision.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply a synchronous state transition.
    fn handle_command(&mut self, command: Self::Command) -> Result<(), Self::Error>;

    /// Perform an asynchronous operation against the injected context.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
