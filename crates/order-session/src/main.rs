//! Demo walkthrough of one ordering session: load the menu, build a cart,
//! fill in contact details, and place a next-day order.
//!
//! Set `ORDER_API_BASE_URL` (or `API_BASE_URL`) to point at a backend; with
//! neither set the menu load falls back to the demo catalog and submission
//! reports the transport failure.

use order_session::lifecycle::OrderApp;
use order_session::model::CustomerField;
use session_actor::telemetry::setup_tracing;
use session_actor::EntityClient;
use tracing::{info, info_span, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    info!("Starting order session demo");

    let app = OrderApp::new();

    let load = app
        .session
        .load_menu()
        .instrument(info_span!("menu_loading"))
        .await
        .map_err(|e| e.to_string())?;
    info!(items = load.items, fallback = load.fallback, "Menu ready");

    let snapshot = app.session.snapshot().await.map_err(|e| e.to_string())?;
    let Some(first) = snapshot.menu.first().cloned() else {
        return Err("Menu is empty, nothing to order".to_string());
    };

    async {
        app.session.increment(&first.id).await?;
        let snapshot = app.session.increment(&first.id).await?;
        info!(
            item = %first.name,
            qty = snapshot.cart.quantity(&first.id),
            subtotal = snapshot.subtotal(),
            "Cart updated"
        );
        Ok::<(), order_session::session::SessionError>(())
    }
    .instrument(info_span!("cart_building"))
    .await
    .map_err(|e| e.to_string())?;

    app.session
        .set_customer_field(CustomerField::Name, "Ada Lovelace")
        .await
        .map_err(|e| e.to_string())?;
    app.session
        .set_customer_field(CustomerField::Phone, "555-0100")
        .await
        .map_err(|e| e.to_string())?;
    app.session
        .set_customer_field(CustomerField::Address, "1 Analytical Way")
        .await
        .map_err(|e| e.to_string())?;

    match app
        .session
        .place_order()
        .instrument(info_span!("order_submission"))
        .await
    {
        Ok(message) => info!(%message, "Order placed"),
        Err(e) => warn!(error = %e, "Order was not placed"),
    }

    app.shutdown().await
}
