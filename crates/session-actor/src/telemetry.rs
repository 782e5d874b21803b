//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by every binary and test harness
//! built on the session actor.
//!
//! ## Configuration
//!
//! A compact format that hides the crate/module prefix (`with_target(false)`); the
//! structured `entity_type` field logged by the actor loop identifies the source
//! instead. Log levels come from `RUST_LOG`.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full command/action payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup and shutdown
//! - **Session operations**: Snapshot, Command, Action with structured fields
//! - **Request flow**: hierarchical spans from `#[instrument]`ed client methods
//! - **Errors**: warn-level records with the entity error's `Display` text
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline
        .init();
}
