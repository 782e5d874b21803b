//! Endpoint configuration from the environment.

use std::env;

use tracing::{info, warn};

/// Environment variables checked for the backend base URL, in order of
/// preference. The first one set to a non-blank value wins.
const BASE_URL_VARS: [&str; 2] = ["ORDER_API_BASE_URL", "API_BASE_URL"];

/// Where the menu and order endpoints live. An empty base URL leaves the
/// paths relative, for deployments that sit behind a same-origin proxy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn load() -> Self {
        for key in BASE_URL_VARS {
            if let Ok(value) = env::var(key) {
                if !value.trim().is_empty() {
                    info!(source = key, "API base URL configured");
                    return Self::with_base(value);
                }
            }
        }
        warn!("No API base URL configured, using relative paths");
        Self::default()
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(&base.into()),
        }
    }

    pub fn menu_url(&self) -> String {
        format!("{}/api/menu", self.base_url)
    }

    pub fn orders_url(&self) -> String {
        format!("{}/api/orders", self.base_url)
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
