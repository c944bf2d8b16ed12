//! PaymentGateway port - interface to the external payment processor.
//!
//! The processor is an opaque external API: this port covers the single
//! outbound operation the service performs, creating a hosted checkout
//! session. No retry is attempted here; the caller owns retry policy.

use async_trait::async_trait;
use thiserror::Error;

/// Processor-ready line item with the amount already converted to the
/// minor-unit integer representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLineItem {
    /// Display name shown on the hosted checkout page.
    pub name: String,
    /// Price per unit in minor currency units (e.g. cents).
    pub unit_amount: i64,
    /// Number of units.
    pub quantity: u32,
}

/// A fully-built checkout session request.
///
/// The order id travels as opaque metadata on the session so it can be
/// recovered from any resulting webhook event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    /// Order identifier to attach as session metadata.
    pub order_id: String,
    /// ISO currency code for all line items.
    pub currency: String,
    /// Converted line items, non-empty.
    pub line_items: Vec<SessionLineItem>,
}

/// A hosted checkout session created by the processor.
///
/// Owned by the caller once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    /// Redirect target after successful payment.
    pub success_url: String,
    /// Redirect target after cancelled checkout.
    pub cancel_url: String,
    /// The processor-hosted checkout page URL.
    pub url: String,
}

/// Failure of the outbound session-creation call.
///
/// All variants surface to the checkout caller unchanged; nothing is
/// retried internally and no partial state is left behind.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never completed (connect, DNS, timeout).
    #[error("gateway request failed: {0}")]
    Network(String),

    /// The processor answered with a non-success status (validation
    /// error, rate limit, auth failure).
    #[error("gateway rejected request with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The processor answered but the response body was not the expected
    /// session shape.
    #[error("gateway returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Port for the external payment processor.
///
/// Implementations are stateless connection handles, safe to share
/// read-only across concurrent requests.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a hosted checkout session for the given request.
    ///
    /// Exactly one outbound call; the caller decides whether to retry on
    /// failure.
    async fn create_checkout_session(
        &self,
        request: SessionRequest,
    ) -> Result<CheckoutSession, GatewayError>;
}
