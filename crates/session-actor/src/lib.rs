//! # Session Actor
//!
//! This crate provides the foundational building blocks for managing a piece of
//! session state behind a Tokio actor. A session here is a single owned value (not a
//! keyed collection) whose every mutation flows through one message loop.
//!
//! ## Why an Actor for Session State?
//!
//! Session state is a classic source of accidental shared mutability: a menu, a cart,
//! a handful of form fields and flags, all touched from several places. Putting the
//! state behind an actor gives us:
//!
//! - **Isolated state**: no shared memory, no locks; the actor task is the only owner.
//! - **Sequential processing**: messages are handled one at a time, so two effectful
//!   operations (say, two order submissions) can never overlap for the same session.
//! - **Observation by snapshot**: readers get clones, never references, so rendering
//!   can't race a mutation.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`SessionEntity`]) - Your session state and its transitions
//! 2. **Runtime Layer** ([`SessionActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`SessionClient`]) - Type-safe communication
//!
//! You write the session's behavior once in the entity trait; the crate handles the
//! channels, the message loop, and error propagation.
//!
//! ## Core Abstractions
//!
//! ```rust
//! use session_actor::{SessionActor, SessionEntity};
//! use async_trait::async_trait;
//!
//! // 1. Define the session state
//! #[derive(Clone, Debug, Default)]
//! struct Tally { total: i64 }
//!
//! #[derive(Debug)] enum TallyCommand { Add(i64) }
//! #[derive(Debug)] enum TallyAction { Reset }
//! #[derive(Debug, thiserror::Error)] #[error("tally error")] struct TallyError;
//!
//! #[async_trait]
//! impl SessionEntity for Tally {
//!     type Command = TallyCommand;
//!     type Action = TallyAction;
//!     type ActionResult = i64;
//!     type Context = ();
//!     type Error = TallyError;
//!
//!     fn handle_command(&mut self, command: TallyCommand) -> Result<(), TallyError> {
//!         match command { TallyCommand::Add(n) => self.total += n }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: TallyAction, _: &()) -> Result<i64, TallyError> {
//!         match action {
//!             TallyAction::Reset => {
//!                 let previous = self.total;
//!                 self.total = 0;
//!                 Ok(previous)
//!             }
//!         }
//!     }
//! }
//!
//! // 2. Use the actor
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = SessionActor::new(Tally::default(), 10);
//!     tokio::spawn(actor.run(()));
//!
//!     let state = client.command(TallyCommand::Add(4)).await.unwrap();
//!     assert_eq!(state.total, 4);
//!     let previous = client.perform_action(TallyAction::Reset).await.unwrap();
//!     assert_eq!(previous, 4);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies (an HTTP client, another actor's client) are injected at **runtime**
//! via `run(context)`, not at construction time. The entity names its dependency set
//! with the `Context` associated type and receives it in every action; entities with
//! no dependencies use `()`. This "late binding" keeps construction trivially simple
//! and makes contexts swappable in tests: a fake implementation of the same trait
//! object slots in without touching the entity.
//!
//! ## Testing
//!
//! The crate provides a [`mock::MockClient`] that exposes the same `SessionClient<T>`
//! API as the real actor but runs entirely in-memory against queued expectations, and
//! channel-level helpers for tests that want to assert on the raw requests. See the
//! [`mock`] module for the full guide.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod telemetry;

// Re-export core types for convenience
pub use actor::SessionActor;
pub use client::SessionClient;
pub use client_trait::EntityClient;
pub use entity::SessionEntity;
pub use error::ActorError;
pub use message::{Response, SessionRequest};
