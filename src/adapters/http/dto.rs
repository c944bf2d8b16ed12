//! HTTP DTOs for the payments endpoints.
//!
//! These types define the JSON boundary between HTTP and the application
//! layer. Field casing matches the wire contract consumed by clients.

use serde::{Deserialize, Serialize};

use crate::domain::{CheckoutItem, CheckoutRequest};
use crate::ports::CheckoutSession;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One line item in a checkout creation request.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutItemDto {
    /// Display name for the hosted checkout page.
    pub name: String,
    /// Price per unit in major currency units.
    pub price: f64,
    /// Number of units.
    pub quantity: u32,
}

/// Request to create a hosted checkout session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    /// Order identifier to correlate later payment events.
    #[serde(rename = "orderId")]
    pub order_id: String,
    /// ISO currency code.
    pub currency: String,
    /// Line items, non-empty.
    pub items: Vec<CheckoutItemDto>,
}

impl From<CreateSessionRequest> for CheckoutRequest {
    fn from(dto: CreateSessionRequest) -> Self {
        CheckoutRequest {
            order_id: dto.order_id,
            currency: dto.currency,
            items: dto
                .items
                .into_iter()
                .map(|item| CheckoutItem {
                    name: item.name,
                    unit_price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Created checkout session returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionResponse {
    /// Redirect target after successful payment.
    #[serde(rename = "successUrl")]
    pub success_url: String,
    /// Redirect target after cancelled checkout.
    #[serde(rename = "cancelUrl")]
    pub cancel_url: String,
    /// The processor-hosted checkout page URL.
    pub url: String,
}

impl From<CheckoutSession> for CreateSessionResponse {
    fn from(session: CheckoutSession) -> Self {
        Self {
            success_url: session.success_url,
            cancel_url: session.cancel_url,
            url: session.url,
        }
    }
}

/// Acknowledgment for the success/cancel redirect landings.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub ok: bool,
    pub message: String,
}

/// Error payload for failed requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_create_session_request() {
        let json = r#"{
            "orderId": "O1",
            "currency": "usd",
            "items": [{"name": "Widget", "price": 19.99, "quantity": 2}]
        }"#;

        let dto: CreateSessionRequest = serde_json::from_str(json).unwrap();
        let request: CheckoutRequest = dto.into();

        assert_eq!(request.order_id, "O1");
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].unit_price, 19.99);
        assert_eq!(request.items[0].quantity, 2);
    }

    #[test]
    fn serialize_create_session_response() {
        let response = CreateSessionResponse {
            success_url: "https://s".to_string(),
            cancel_url: "https://c".to_string(),
            url: "https://pay".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["successUrl"], "https://s");
        assert_eq!(value["cancelUrl"], "https://c");
        assert_eq!(value["url"], "https://pay");
    }
}
