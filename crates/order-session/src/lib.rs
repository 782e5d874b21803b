//! # Order Session
//!
//! A next-day food ordering session built on the `session-actor` framework.
//!
//! The session state (menu, cart, customer details) lives inside a single
//! actor. Cart and customer edits are commands that respond with the updated
//! snapshot; the menu fetch and order submission are actions that call the
//! backend through an injected [`api::OrderApi`]. See
//! [`lifecycle::OrderApp`] for starting and stopping a session and
//! [`clients::OrderSessionClient`] for driving one.

pub mod api;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod session;
