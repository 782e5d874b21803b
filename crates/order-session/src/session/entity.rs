//! The [`OrderSession`] state machine.

use async_trait::async_trait;
use session_actor::SessionEntity;
use tracing::{debug, info, warn};

use crate::model::{
    fallback_menu, Cart, Customer, MenuItem, OrderItem, OrderRequest, DEFAULT_CONFIRMATION,
    REQUESTED_DELIVERY,
};
use crate::session::actions::{MenuLoad, SessionAction, SessionActionResult, SessionCommand};
use crate::session::error::SessionError;
use crate::session::SessionContext;

/// Everything one ordering session tracks. Cloned out as the snapshot on
/// every command response and snapshot request.
#[derive(Debug, Clone, Default)]
pub struct OrderSession {
    /// The current catalog; empty until the first menu load completes.
    pub menu: Vec<MenuItem>,
    pub cart: Cart,
    pub customer: Customer,
    /// True while a menu fetch is in flight.
    pub loading_menu: bool,
    /// True while a submission is in flight. The actor processes one
    /// message at a time, so no second submission can start meanwhile.
    pub submitting: bool,
    /// Display text for the last failed menu load, if any.
    pub menu_error: Option<String>,
    /// Confirmation text from the last successful order.
    pub confirmation: Option<String>,
}

impl OrderSession {
    /// The cart joined with the menu, in menu order.
    pub fn line_items(&self) -> Vec<crate::model::LineItem> {
        self.cart.line_items(&self.menu)
    }

    pub fn subtotal(&self) -> f64 {
        self.cart.subtotal(&self.menu)
    }

    fn build_order_request(&self) -> Result<OrderRequest, SessionError> {
        let lines = self.line_items();
        if lines.is_empty() {
            return Err(SessionError::EmptyCart);
        }
        let customer = self.customer.trimmed();
        if !customer.has_contact_info() {
            return Err(SessionError::MissingContactInfo);
        }
        Ok(OrderRequest {
            customer,
            items: lines
                .into_iter()
                .map(|line| OrderItem {
                    id: line.item.id,
                    qty: line.qty,
                })
                .collect(),
            requested_delivery: REQUESTED_DELIVERY.to_string(),
        })
    }

    async fn load_menu(&mut self, ctx: &SessionContext) -> MenuLoad {
        self.loading_menu = true;
        let outcome = ctx.fetch_menu().await;
        self.loading_menu = false;
        match outcome {
            Ok(items) => {
                info!(items = items.len(), "Menu loaded");
                self.menu = items;
                self.menu_error = None;
                MenuLoad {
                    items: self.menu.len(),
                    fallback: false,
                }
            }
            Err(e) => {
                warn!(error = %e, "Menu fetch failed, using the demo catalog");
                self.menu = fallback_menu();
                self.menu_error = Some(SessionError::MenuUnavailable(e.to_string()).to_string());
                MenuLoad {
                    items: self.menu.len(),
                    fallback: true,
                }
            }
        }
    }

    async fn submit_order(&mut self, ctx: &SessionContext) -> Result<String, SessionError> {
        // Both gates fire before any network traffic.
        let request = self.build_order_request()?;

        self.submitting = true;
        let outcome = ctx.submit_order(&request).await;
        self.submitting = false;

        match outcome {
            Ok(receipt) => {
                let message = receipt
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_CONFIRMATION.to_string());
                info!("Order accepted");
                self.cart.clear();
                self.customer = Customer::default();
                self.confirmation = Some(message.clone());
                Ok(message)
            }
            // Cart and customer are left untouched so the caller can retry.
            Err(e) => Err(SessionError::SubmissionFailed(e.to_string())),
        }
    }
}

#[async_trait]
impl SessionEntity for OrderSession {
    type Command = SessionCommand;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Context = SessionContext;
    type Error = SessionError;

    fn handle_command(&mut self, command: SessionCommand) -> Result<(), SessionError> {
        debug!(?command, "Applying session command");
        match command {
            SessionCommand::SetQuantity { item_id, raw } => {
                self.cart.set_quantity(&item_id, &raw);
            }
            SessionCommand::Increment { item_id } => self.cart.increment(&item_id),
            SessionCommand::Decrement { item_id } => self.cart.decrement(&item_id),
            SessionCommand::ClearCart => self.cart.clear(),
            SessionCommand::SetCustomerField { field, value } => {
                self.customer.set_field(field, value);
            }
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        ctx: &SessionContext,
    ) -> Result<SessionActionResult, SessionError> {
        match action {
            SessionAction::LoadMenu => Ok(SessionActionResult::MenuLoaded(self.load_menu(ctx).await)),
            SessionAction::SubmitOrder => {
                let message = self.submit_order(ctx).await?;
                Ok(SessionActionResult::OrderPlaced { message })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomerField;

    fn menu_item(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            description: None,
            price,
        }
    }

    fn session_with_menu() -> OrderSession {
        OrderSession {
            menu: vec![menu_item("a", 6.0), menu_item("b", 7.5)],
            ..OrderSession::default()
        }
    }

    #[test]
    fn test_commands_edit_cart_and_customer() {
        let mut session = session_with_menu();
        session
            .handle_command(SessionCommand::Increment {
                item_id: "a".to_string(),
            })
            .unwrap();
        session
            .handle_command(SessionCommand::SetQuantity {
                item_id: "b".to_string(),
                raw: "2.9".to_string(),
            })
            .unwrap();
        session
            .handle_command(SessionCommand::SetCustomerField {
                field: CustomerField::Name,
                value: "Ada".to_string(),
            })
            .unwrap();

        assert_eq!(session.cart.quantity("a"), 1);
        assert_eq!(session.cart.quantity("b"), 2);
        assert_eq!(session.subtotal(), 21.0);
        assert_eq!(session.customer.name, "Ada");

        session.handle_command(SessionCommand::ClearCart).unwrap();
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_order_request_gates_fire_in_order() {
        let mut session = session_with_menu();
        assert_eq!(session.build_order_request(), Err(SessionError::EmptyCart));

        session.cart.increment("a");
        assert_eq!(
            session.build_order_request(),
            Err(SessionError::MissingContactInfo)
        );

        session.customer.set_field(CustomerField::Name, "Ada".to_string());
        session
            .customer
            .set_field(CustomerField::Phone, "555-0100".to_string());
        session
            .customer
            .set_field(CustomerField::Address, " 1 Loop Lane ".to_string());

        let request = session.build_order_request().unwrap();
        assert_eq!(request.requested_delivery, "next-day");
        assert_eq!(request.customer.address, "1 Loop Lane");
        assert_eq!(
            request.items,
            vec![OrderItem {
                id: "a".to_string(),
                qty: 1
            }]
        );
    }

    #[test]
    fn test_order_request_follows_menu_order() {
        let mut session = session_with_menu();
        session.cart.increment("b");
        session.cart.increment("a");
        session.customer.set_field(CustomerField::Name, "Ada".to_string());
        session
            .customer
            .set_field(CustomerField::Phone, "555-0100".to_string());
        session
            .customer
            .set_field(CustomerField::Address, "1 Loop Lane".to_string());

        let ids: Vec<_> = session
            .build_order_request()
            .unwrap()
            .items
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
