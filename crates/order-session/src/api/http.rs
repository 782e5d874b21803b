//! The [`OrderApi`] trait and its reqwest implementation.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::api::config::ApiConfig;
use crate::model::{MenuItem, MenuResponse, OrderReceipt, OrderRequest};

/// Errors from the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, ...).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `message` carries the
    /// response body text when there is one, or a generic description.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response body: {0}")]
    Decode(String),
}

/// The two calls the session makes against the backend. The session actor
/// holds this as `Arc<dyn OrderApi>`, so tests substitute canned
/// implementations.
#[async_trait]
pub trait OrderApi: Send + Sync {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, ApiError>;
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderReceipt, ApiError>;
}

/// Production [`OrderApi`] backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpOrderApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpOrderApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl OrderApi for HttpOrderApi {
    #[tracing::instrument(skip(self))]
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        let url = self.config.menu_url();
        debug!(url, "Fetching menu");
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: failure_message(status.as_u16(), &body, "Menu request failed"),
            });
        }
        let body = response.bytes().await?;
        let parsed = serde_json::from_slice::<MenuResponse>(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parsed.into_items())
    }

    #[tracing::instrument(skip(self, request))]
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderReceipt, ApiError> {
        let url = self.config.orders_url();
        debug!(url, items = request.items.len(), "Submitting order");
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: failure_message(status.as_u16(), &body, "Order submission failed"),
            });
        }
        // An acknowledgement whose body doesn't parse is still a success;
        // the confirmation message just falls back to the default.
        match response.json::<OrderReceipt>().await {
            Ok(receipt) => Ok(receipt),
            Err(e) => {
                warn!(error = %e, "Ignoring unparseable order acknowledgement body");
                Ok(OrderReceipt::default())
            }
        }
    }
}

/// Prefer the backend's own words; fall back to a status-coded description
/// when the body is blank.
fn failure_message(status: u16, body: &str, context: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("{context} (HTTP {status})")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_body_text() {
        assert_eq!(failure_message(400, "Out of stock\n", "Order submission failed"), "Out of stock");
    }

    #[test]
    fn test_failure_message_falls_back_to_status() {
        assert_eq!(
            failure_message(503, "   ", "Order submission failed"),
            "Order submission failed (HTTP 503)"
        );
    }

    #[test]
    fn test_status_error_displays_message_only() {
        let err = ApiError::Status {
            status: 400,
            message: "Out of stock".to_string(),
        };
        assert_eq!(err.to_string(), "Out of stock");
    }
}
