//! End-to-end test: the full application lifecycle driven through the typed
//! client, against a canned backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use order_session::api::{ApiError, OrderApi};
use order_session::lifecycle::OrderApp;
use order_session::model::{CustomerField, MenuItem, OrderReceipt, OrderRequest};
use order_session::session::SessionError;
use session_actor::EntityClient;

struct ScriptedBackend {
    menu: Vec<MenuItem>,
    confirmation: Option<String>,
    submissions: Mutex<Vec<OrderRequest>>,
}

#[async_trait]
impl OrderApi for ScriptedBackend {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        Ok(self.menu.clone())
    }

    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderReceipt, ApiError> {
        self.submissions.lock().unwrap().push(request.clone());
        Ok(OrderReceipt {
            message: self.confirmation.clone(),
        })
    }
}

fn item(id: &str, name: &str, price: f64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(format!("{name}, made fresh daily")),
        price,
    }
}

#[tokio::test]
async fn test_full_ordering_flow() {
    let backend = Arc::new(ScriptedBackend {
        menu: vec![item("soup", "Tomato Soup", 6.0), item("salad", "Garden Salad", 7.5)],
        confirmation: Some("Order #42 confirmed".to_string()),
        submissions: Mutex::new(Vec::new()),
    });
    let app = OrderApp::with_api(backend.clone());

    let load = app.session.load_menu().await.unwrap();
    assert_eq!(load.items, 2);
    assert!(!load.fallback);

    // Build a cart: two soups via raw text (floored from "2.9"), one salad.
    app.session.set_quantity("soup", "2.9").await.unwrap();
    let snapshot = app.session.increment("salad").await.unwrap();
    assert_eq!(snapshot.subtotal(), 19.5);

    // A junk quantity clears the salad line again.
    let snapshot = app.session.set_quantity("salad", "abc").await.unwrap();
    assert_eq!(snapshot.cart.quantity("salad"), 0);
    assert_eq!(snapshot.subtotal(), 12.0);

    // Submission is gated until contact details are in.
    let err = app.session.place_order().await.unwrap_err();
    assert_eq!(err, SessionError::MissingContactInfo);

    app.session
        .set_customer_field(CustomerField::Name, "Ada Lovelace")
        .await
        .unwrap();
    app.session
        .set_customer_field(CustomerField::Phone, "555-0100")
        .await
        .unwrap();
    app.session
        .set_customer_field(CustomerField::Address, "1 Analytical Way")
        .await
        .unwrap();
    app.session
        .set_customer_field(CustomerField::Notes, "Leave at the door")
        .await
        .unwrap();

    let message = app.session.place_order().await.unwrap();
    assert_eq!(message, "Order #42 confirmed");

    let submissions = backend.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].customer.notes, "Leave at the door");
    assert_eq!(submissions[0].items.len(), 1);
    assert_eq!(submissions[0].items[0].id, "soup");
    assert_eq!(submissions[0].items[0].qty, 2);
    drop(submissions);

    // The session is reset and a second submission hits the empty-cart gate.
    let snapshot = app.session.snapshot().await.unwrap();
    assert!(snapshot.cart.is_empty());
    assert_eq!(snapshot.customer.name, "");
    assert_eq!(snapshot.confirmation.as_deref(), Some("Order #42 confirmed"));

    let err = app.session.place_order().await.unwrap_err();
    assert_eq!(err, SessionError::EmptyCart);

    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_client_reports_session_unavailable_when_actor_is_gone() {
    let (actor, client) = order_session::session::new();
    drop(actor);

    let client = order_session::clients::OrderSessionClient::new(client);
    let err = client.clear_cart().await.unwrap_err();
    assert!(matches!(err, SessionError::ActorUnavailable(_)));
}
