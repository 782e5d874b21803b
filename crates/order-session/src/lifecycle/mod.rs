//! # Application Lifecycle
//!
//! [`OrderApp`] owns the session actor: it spawns the actor task with an
//! [`OrderApi`] context, hands out the typed client, and tears the actor
//! down cleanly on shutdown. Dropping the last client closes the channel,
//! which ends the actor's run loop.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::api::{ApiConfig, HttpOrderApi, OrderApi};
use crate::clients::OrderSessionClient;
use crate::session;

/// A running ordering session: the client plus the actor task handle.
pub struct OrderApp {
    pub session: OrderSessionClient,
    actor_handle: JoinHandle<()>,
}

impl OrderApp {
    /// Starts a session against the real backend, with endpoints read from
    /// the environment.
    pub fn new() -> Self {
        let config = ApiConfig::load();
        Self::with_api(Arc::new(HttpOrderApi::new(config)))
    }

    /// Starts a session against an arbitrary [`OrderApi`]. Integration
    /// tests use this to run the full actor with a canned backend.
    pub fn with_api(api: Arc<dyn OrderApi>) -> Self {
        info!("Starting order session actor");
        let (actor, client) = session::new();
        let actor_handle = tokio::spawn(actor.run(api));
        Self {
            session: OrderSessionClient::new(client),
            actor_handle,
        }
    }

    /// Drops the client and waits for the actor task to drain and exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order session");
        drop(self.session);
        if let Err(e) = self.actor_handle.await {
            error!(error = %e, "Session actor task failed");
            return Err(format!("Session actor task failed: {e}"));
        }
        info!("Shutdown complete");
        Ok(())
    }
}

impl Default for OrderApp {
    fn default() -> Self {
        Self::new()
    }
}
