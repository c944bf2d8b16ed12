//! CreateSessionHandler - builds and issues a checkout session request.
//!
//! Validates the checkout request, converts item prices to the
//! processor's minor-unit representation, and performs the single
//! outbound session-creation call. Nothing is persisted locally, so a
//! failed call leaves no partial state.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{to_minor_units, CheckoutRequest, CheckoutValidationError};
use crate::ports::{CheckoutSession, GatewayError, PaymentGateway, SessionLineItem, SessionRequest};

/// Failures of the checkout entry path.
#[derive(Debug, Error)]
pub enum CreateSessionError {
    /// The request was malformed; no external call was made.
    #[error(transparent)]
    Validation(#[from] CheckoutValidationError),

    /// The processor call failed; the caller decides retry policy.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Handler for the checkout-creation entry path.
pub struct CreateSessionHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateSessionHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Validate, convert, and create a hosted checkout session.
    ///
    /// # Errors
    ///
    /// `Validation` if the request violates checkout invariants (checked
    /// before any external call), `Gateway` if the processor call fails.
    pub async fn handle(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, CreateSessionError> {
        request.validate()?;

        let line_items = request
            .items
            .iter()
            .map(|item| SessionLineItem {
                name: item.name.clone(),
                unit_amount: to_minor_units(item.unit_price),
                quantity: item.quantity,
            })
            .collect();

        let session_request = SessionRequest {
            order_id: request.order_id.clone(),
            currency: request.currency.clone(),
            line_items,
        };

        let session = self.gateway.create_checkout_session(session_request).await?;

        tracing::info!(order_id = %request.order_id, "Checkout session issued");

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CheckoutItem;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Gateway stub that records the request it receives.
    #[derive(Default)]
    struct RecordingGateway {
        received: Mutex<Option<SessionRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl PaymentGateway for RecordingGateway {
        async fn create_checkout_session(
            &self,
            request: SessionRequest,
        ) -> Result<CheckoutSession, GatewayError> {
            *self.received.lock().unwrap() = Some(request);
            if self.fail {
                return Err(GatewayError::Network("connection reset".to_string()));
            }
            Ok(CheckoutSession {
                success_url: "https://shop.example.com/payments/success".to_string(),
                cancel_url: "https://shop.example.com/payments/cancelled".to_string(),
                url: "https://checkout.example.com/c/pay/cs_test".to_string(),
            })
        }
    }

    fn widget_order() -> CheckoutRequest {
        CheckoutRequest {
            order_id: "O1".to_string(),
            currency: "usd".to_string(),
            items: vec![CheckoutItem {
                name: "Widget".to_string(),
                unit_price: 19.99,
                quantity: 2,
            }],
        }
    }

    #[tokio::test]
    async fn converts_prices_to_minor_units() {
        let gateway = Arc::new(RecordingGateway::default());
        let handler = CreateSessionHandler::new(gateway.clone());

        let session = handler.handle(widget_order()).await.unwrap();

        assert_eq!(session.url, "https://checkout.example.com/c/pay/cs_test");

        let received = gateway.received.lock().unwrap().clone().unwrap();
        assert_eq!(received.order_id, "O1");
        assert_eq!(received.currency, "usd");
        assert_eq!(received.line_items.len(), 1);
        assert_eq!(received.line_items[0].unit_amount, 1999);
        assert_eq!(received.line_items[0].quantity, 2);
        assert_eq!(received.line_items[0].name, "Widget");
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_the_gateway() {
        let gateway = Arc::new(RecordingGateway::default());
        let handler = CreateSessionHandler::new(gateway.clone());

        let mut order = widget_order();
        order.items.clear();

        let result = handler.handle(order).await;

        assert!(matches!(
            result,
            Err(CreateSessionError::Validation(
                CheckoutValidationError::EmptyItems
            ))
        ));
        assert!(gateway.received.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn gateway_failure_surfaces_to_caller() {
        let gateway = Arc::new(RecordingGateway {
            fail: true,
            ..Default::default()
        });
        let handler = CreateSessionHandler::new(gateway);

        let result = handler.handle(widget_order()).await;

        assert!(matches!(result, Err(CreateSessionError::Gateway(_))));
    }
}
