//! # Order Session Client
//!
//! The typed handle the rest of the application drives the session through.
//! Each method wraps one command or action, converts actor-plumbing errors
//! back into [`SessionError`], and logs the request.
//!
//! Actor-side rejections (empty cart, missing contact info, backend
//! failures) travel through the channel as boxed entity errors; this wrapper
//! downcasts them back so callers can pattern-match the original variants.

use async_trait::async_trait;
use session_actor::{ActorError, EntityClient, SessionClient};
use tracing::debug;

use crate::model::CustomerField;
use crate::session::{
    MenuLoad, OrderSession, SessionAction, SessionActionResult, SessionCommand, SessionError,
};

/// Client for the ordering session actor.
#[derive(Clone)]
pub struct OrderSessionClient {
    inner: SessionClient<OrderSession>,
}

impl OrderSessionClient {
    pub fn new(inner: SessionClient<OrderSession>) -> Self {
        Self { inner }
    }

    /// Fetches the daily menu, substituting the demo catalog on failure.
    #[tracing::instrument(skip(self))]
    pub async fn load_menu(&self) -> Result<MenuLoad, SessionError> {
        debug!("Sending request");
        match self.inner.perform_action(SessionAction::LoadMenu).await {
            Ok(SessionActionResult::MenuLoaded(load)) => Ok(load),
            Ok(other) => unreachable!("LoadMenu returned {other:?}"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Sets an item's quantity from raw text; zero or junk removes the line.
    #[tracing::instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        item_id: &str,
        raw: &str,
    ) -> Result<OrderSession, SessionError> {
        debug!("Sending request");
        self.inner
            .command(SessionCommand::SetQuantity {
                item_id: item_id.to_string(),
                raw: raw.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    pub async fn increment(&self, item_id: &str) -> Result<OrderSession, SessionError> {
        debug!("Sending request");
        self.inner
            .command(SessionCommand::Increment {
                item_id: item_id.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    pub async fn decrement(&self, item_id: &str) -> Result<OrderSession, SessionError> {
        debug!("Sending request");
        self.inner
            .command(SessionCommand::Decrement {
                item_id: item_id.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<OrderSession, SessionError> {
        debug!("Sending request");
        self.inner
            .command(SessionCommand::ClearCart)
            .await
            .map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self, value))]
    pub async fn set_customer_field(
        &self,
        field: CustomerField,
        value: &str,
    ) -> Result<OrderSession, SessionError> {
        debug!("Sending request");
        self.inner
            .command(SessionCommand::SetCustomerField {
                field,
                value: value.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// Validates and submits the current cart for next-day delivery,
    /// returning the confirmation message on success.
    #[tracing::instrument(skip(self))]
    pub async fn place_order(&self) -> Result<String, SessionError> {
        debug!("Sending request");
        match self.inner.perform_action(SessionAction::SubmitOrder).await {
            Ok(SessionActionResult::OrderPlaced { message }) => Ok(message),
            Ok(other) => unreachable!("SubmitOrder returned {other:?}"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl EntityClient<OrderSession> for OrderSessionClient {
    type Error = SessionError;

    fn inner(&self) -> &SessionClient<OrderSession> {
        &self.inner
    }

    fn map_error(e: ActorError) -> SessionError {
        match e.downcast_entity::<SessionError>() {
            Ok(session_error) => session_error,
            Err(other) => SessionError::ActorUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session_actor::mock::{create_mock_client, expect_action, expect_command, MockClient};

    #[tokio::test]
    async fn test_increment_sends_the_right_command() {
        let (client, mut receiver) = create_mock_client::<OrderSession>(8);
        let client = OrderSessionClient::new(client);

        let request = tokio::spawn(async move { client.increment("m1").await });

        let (command, respond_to) = expect_command(&mut receiver).await.unwrap();
        assert_eq!(
            command,
            SessionCommand::Increment {
                item_id: "m1".to_string()
            }
        );
        respond_to.send(Ok(OrderSession::default())).unwrap();

        assert!(request.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_place_order_sends_submit_action() {
        let (client, mut receiver) = create_mock_client::<OrderSession>(8);
        let client = OrderSessionClient::new(client);

        let request = tokio::spawn(async move { client.place_order().await });

        let (action, respond_to) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(action, SessionAction::SubmitOrder);
        respond_to
            .send(Ok(SessionActionResult::OrderPlaced {
                message: "Thanks!".to_string(),
            }))
            .unwrap();

        assert_eq!(request.await.unwrap().unwrap(), "Thanks!");
    }

    #[tokio::test]
    async fn test_entity_errors_are_downcast_to_session_errors() {
        let (client, mut receiver) = create_mock_client::<OrderSession>(8);
        let client = OrderSessionClient::new(client);

        let request = tokio::spawn(async move { client.place_order().await });

        let (_, respond_to) = expect_action(&mut receiver).await.unwrap();
        respond_to
            .send(Err(ActorError::EntityError(Box::new(
                SessionError::EmptyCart,
            ))))
            .unwrap();

        assert_eq!(request.await.unwrap(), Err(SessionError::EmptyCart));
    }

    #[tokio::test]
    async fn test_snapshot_with_mock_client() {
        let mut mock = MockClient::<OrderSession>::new();
        mock.expect_snapshot().return_ok(OrderSession::default());

        let client = OrderSessionClient::new(mock.client());
        let snapshot = client.snapshot().await.unwrap();
        assert!(snapshot.cart.is_empty());
        mock.verify();
    }
}
