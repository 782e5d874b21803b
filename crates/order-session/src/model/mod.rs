//! Pure data model for the ordering session.
//!
//! Everything in here is plain data with synchronous methods: the menu
//! catalog, the cart keyed by menu item id, the customer contact details,
//! and the wire shapes exchanged with the backend. None of it knows about
//! the actor or the HTTP layer, which keeps it trivially unit-testable.

pub mod cart;
pub mod customer;
pub mod menu;
pub mod order;

pub use cart::{Cart, LineItem};
pub use customer::{Customer, CustomerField};
pub use menu::{fallback_menu, MenuItem, MenuResponse};
pub use order::{OrderItem, OrderReceipt, OrderRequest, DEFAULT_CONFIRMATION, REQUESTED_DELIVERY};
