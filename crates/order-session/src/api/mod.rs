//! HTTP boundary: endpoint configuration, the [`OrderApi`] trait the
//! session actor calls through, and the reqwest-backed implementation.
//!
//! The session actor only ever sees `Arc<dyn OrderApi>`, so tests swap in
//! canned implementations and never touch the network.

pub mod config;
pub mod http;

pub use config::ApiConfig;
pub use http::{ApiError, HttpOrderApi, OrderApi};
