//! Wire shapes for order submission.

use serde::{Deserialize, Serialize};

use crate::model::customer::Customer;

/// The only delivery window the backend currently accepts.
pub const REQUESTED_DELIVERY: &str = "next-day";

/// Confirmation shown when the backend acknowledges an order without a
/// message of its own.
pub const DEFAULT_CONFIRMATION: &str = "Order received! We'll deliver it tomorrow.";

/// One submitted line: menu item id and whole-number quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub id: String,
    pub qty: u32,
}

/// The POST body for order submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub requested_delivery: String,
}

/// The backend's acknowledgement. Any body that fails to parse is treated
/// as an empty receipt, so a missing or malformed message never fails an
/// otherwise successful submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderReceipt {
    #[serde(default)]
    pub message: Option<String>,
}
