//! The ordering session entity and its actor wiring.
//!
//! [`OrderSession`] owns everything the session tracks: the menu, the cart,
//! the customer details, the in-flight flags, and the latest confirmation or
//! menu error. It runs inside a [`SessionActor`], so every command and
//! action is applied one at a time; a second submission can never start
//! while one is in flight because the actor won't pick up the next message
//! until the current one resolves.
//!
//! Cheap synchronous edits (cart and customer changes) are commands; the
//! two backend calls (menu load, order submission) are actions that receive
//! the [`OrderApi`](crate::api::OrderApi) handle as actor context.

pub mod actions;
pub mod entity;
pub mod error;

use std::sync::Arc;

use session_actor::{SessionActor, SessionClient};

pub use actions::{MenuLoad, SessionAction, SessionActionResult, SessionCommand};
pub use entity::OrderSession;
pub use error::SessionError;

use crate::api::OrderApi;

/// Message buffer for the session actor channel.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Creates a fresh session actor and its client. The actor still needs to
/// be spawned with an [`OrderApi`] context:
///
/// ```ignore
/// let (actor, client) = session::new();
/// tokio::spawn(actor.run(api));
/// ```
pub fn new() -> (
    SessionActor<OrderSession>,
    SessionClient<OrderSession>,
) {
    SessionActor::new(OrderSession::default(), CHANNEL_BUFFER_SIZE)
}

/// The context type the session actor runs with.
pub type SessionContext = Arc<dyn OrderApi>;
