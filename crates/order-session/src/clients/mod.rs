//! Typed client wrappers over the generic session client.

pub mod session_client;

pub use session_client::OrderSessionClient;
