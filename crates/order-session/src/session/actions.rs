//! Commands and actions the session entity understands.

use crate::model::CustomerField;

/// Synchronous state edits. Each one responds with the updated session
/// snapshot, so callers see the cart as it is after their change.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Set an item's quantity from raw text (coerced; zero removes the line).
    SetQuantity { item_id: String, raw: String },
    /// Add one to an item's quantity.
    Increment { item_id: String },
    /// Remove one from an item's quantity, dropping the line at zero.
    Decrement { item_id: String },
    /// Empty the cart.
    ClearCart,
    /// Update one customer contact field.
    SetCustomerField { field: CustomerField, value: String },
}

/// Operations that call the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Fetch the daily menu, falling back to the demo catalog on failure.
    LoadMenu,
    /// Validate and submit the current cart as a next-day order.
    SubmitOrder,
}

/// What a completed menu load reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLoad {
    /// Number of items now on the menu.
    pub items: usize,
    /// True when the demo catalog was substituted for a failed fetch.
    pub fallback: bool,
}

/// Results of session actions.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionActionResult {
    MenuLoaded(MenuLoad),
    OrderPlaced { message: String },
}
