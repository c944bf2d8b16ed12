//! Stripe checkout session gateway.
//!
//! Implements the `PaymentGateway` port against the processor's
//! form-encoded HTTP API. One outbound call per session request, no
//! retries; the secret key is held via `secrecy::SecretString`.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{CheckoutSession, GatewayError, PaymentGateway, SessionRequest};

use super::types::SessionResponse;

/// Gateway API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_live_... or sk_test_...).
    secret_key: SecretString,

    /// Base URL for the processor API.
    api_base_url: String,

    /// Redirect target after successful payment.
    success_url: String,

    /// Redirect target after cancelled checkout.
    cancel_url: String,
}

impl StripeConfig {
    /// Create a new gateway configuration.
    pub fn new(
        secret_key: impl Into<String>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            secret_key: SecretString::new(secret_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe payment gateway adapter.
///
/// A stateless connection handle, constructed once at startup and shared
/// read-only across concurrent requests.
pub struct StripeGateway {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Build the form-encoded parameters for a session-creation call.
    ///
    /// The order id rides along as payment-intent metadata so every
    /// downstream charge event carries it back to us.
    fn session_params(&self, request: &SessionRequest) -> Vec<(String, String)> {
        let mut params = vec![
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), self.config.success_url.clone()),
            ("cancel_url".to_string(), self.config.cancel_url.clone()),
            (
                "payment_intent_data[metadata][orderId]".to_string(),
                request.order_id.clone(),
            ),
        ];

        for (i, item) in request.line_items.iter().enumerate() {
            params.push((
                format!("line_items[{}][price_data][currency]", i),
                request.currency.clone(),
            ));
            params.push((
                format!("line_items[{}][price_data][product_data][name]", i),
                item.name.clone(),
            ));
            params.push((
                format!("line_items[{}][price_data][unit_amount]", i),
                item.unit_amount.to_string(),
            ));
            params.push((
                format!("line_items[{}][quantity]", i),
                item.quantity.to_string(),
            ));
        }

        params
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_checkout_session(
        &self,
        request: SessionRequest,
    ) -> Result<CheckoutSession, GatewayError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);
        let params = self.session_params(&request);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.secret_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                order_id = %request.order_id,
                error = %error_text,
                "Session creation rejected by gateway"
            );
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let hosted_url = session.url.ok_or_else(|| {
            GatewayError::InvalidResponse(format!("session {} has no hosted url", session.id))
        })?;

        tracing::info!(
            session_id = %session.id,
            order_id = %request.order_id,
            "Checkout session created"
        );

        Ok(CheckoutSession {
            success_url: session
                .success_url
                .unwrap_or_else(|| self.config.success_url.clone()),
            cancel_url: session
                .cancel_url
                .unwrap_or_else(|| self.config.cancel_url.clone()),
            url: hosted_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::SessionLineItem;

    fn test_gateway() -> StripeGateway {
        StripeGateway::new(StripeConfig::new(
            "sk_test_key",
            "https://shop.example.com/payments/success",
            "https://shop.example.com/payments/cancelled",
        ))
    }

    fn widget_request() -> SessionRequest {
        SessionRequest {
            order_id: "O1".to_string(),
            currency: "usd".to_string(),
            line_items: vec![SessionLineItem {
                name: "Widget".to_string(),
                unit_amount: 1999,
                quantity: 2,
            }],
        }
    }

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    // ══════════════════════════════════════════════════════════════
    // Form Parameter Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn session_params_carry_order_metadata() {
        let params = test_gateway().session_params(&widget_request());

        assert_eq!(param(&params, "mode"), Some("payment"));
        assert_eq!(
            param(&params, "payment_intent_data[metadata][orderId]"),
            Some("O1")
        );
        assert_eq!(
            param(&params, "success_url"),
            Some("https://shop.example.com/payments/success")
        );
        assert_eq!(
            param(&params, "cancel_url"),
            Some("https://shop.example.com/payments/cancelled")
        );
    }

    #[test]
    fn session_params_convert_line_items() {
        let params = test_gateway().session_params(&widget_request());

        assert_eq!(
            param(&params, "line_items[0][price_data][currency]"),
            Some("usd")
        );
        assert_eq!(
            param(&params, "line_items[0][price_data][product_data][name]"),
            Some("Widget")
        );
        assert_eq!(
            param(&params, "line_items[0][price_data][unit_amount]"),
            Some("1999")
        );
        assert_eq!(param(&params, "line_items[0][quantity]"), Some("2"));
    }

    #[test]
    fn session_params_index_multiple_items() {
        let mut request = widget_request();
        request.line_items.push(SessionLineItem {
            name: "Gadget".to_string(),
            unit_amount: 500,
            quantity: 1,
        });

        let params = test_gateway().session_params(&request);

        assert_eq!(
            param(&params, "line_items[1][price_data][product_data][name]"),
            Some("Gadget")
        );
        assert_eq!(
            param(&params, "line_items[1][price_data][unit_amount]"),
            Some("500")
        );
    }

    #[test]
    fn config_with_base_url_overrides_default() {
        let config = StripeConfig::new("sk_test", "https://s", "https://c")
            .with_base_url("http://localhost:12111");
        assert_eq!(config.api_base_url, "http://localhost:12111");
    }
}
