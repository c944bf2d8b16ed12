//! Integration tests for the payments HTTP endpoints.
//!
//! Exercises the full request path through the axum router: checkout
//! session creation against a mock gateway, and the webhook pipeline
//! (verify -> translate -> publish) against the in-memory bus with real
//! signature verification.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use hmac::{Hmac, Mac};
use serde_json::{json, Value};
use sha2::Sha256;
use tower::ServiceExt;

use payments_gateway::adapters::events::InMemoryEventBus;
use payments_gateway::adapters::http::{payment_routes, AppState};
use payments_gateway::domain::WebhookVerifier;
use payments_gateway::ports::{
    CheckoutSession, EventPublisher, GatewayError, PaymentGateway, SessionRequest,
};

const WEBHOOK_SECRET: &str = "whsec_integration_secret";

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Mock gateway recording the session request it receives.
#[derive(Default)]
struct MockGateway {
    received: Mutex<Vec<SessionRequest>>,
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_checkout_session(
        &self,
        request: SessionRequest,
    ) -> Result<CheckoutSession, GatewayError> {
        self.received.lock().unwrap().push(request);
        Ok(CheckoutSession {
            success_url: "https://shop.example.com/payments/success".to_string(),
            cancel_url: "https://shop.example.com/payments/cancelled".to_string(),
            url: "https://checkout.example.com/c/pay/cs_test_1".to_string(),
        })
    }
}

struct TestApp {
    router: axum::Router,
    gateway: Arc<MockGateway>,
    bus: Arc<InMemoryEventBus>,
}

fn test_app(ack_on_publish_failure: bool) -> TestApp {
    let gateway = Arc::new(MockGateway::default());
    let bus = Arc::new(InMemoryEventBus::new());

    let state = AppState {
        gateway: gateway.clone(),
        publisher: bus.clone() as Arc<dyn EventPublisher>,
        verifier: Arc::new(WebhookVerifier::new(WEBHOOK_SECRET)),
        ack_on_publish_failure,
    };

    let router = axum::Router::new()
        .nest("/payments", payment_routes())
        .with_state(state);

    TestApp {
        router,
        gateway,
        bus,
    }
}

/// Compute a valid signature header the way the processor does.
fn sign(secret: &str, timestamp: i64, body: &str) -> String {
    let signed_payload = format!("{}.{}", timestamp, body);
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(signed_payload.as_bytes());
    let hex: String = mac
        .finalize()
        .into_bytes()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect();
    format!("t={},v1={}", timestamp, hex)
}

fn charge_succeeded_body(order_id: &str) -> String {
    json!({
        "id": "evt_int_1",
        "type": "charge.succeeded",
        "created": 1704067200,
        "data": {"object": {
            "id": "ch_int_1",
            "receipt_url": "https://pay.example.com/receipts/r1",
            "metadata": {"orderId": order_id}
        }},
        "livemode": false
    })
    .to_string()
}

async fn post_webhook(app: &TestApp, body: &str, signature: Option<&str>) -> StatusCode {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/payments/webhook")
        .header("content-type", "application/json");
    if let Some(sig) = signature {
        builder = builder.header("Stripe-Signature", sig);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    app.router
        .clone()
        .oneshot(request)
        .await
        .unwrap()
        .status()
}

// =============================================================================
// Checkout Session Creation
// =============================================================================

#[tokio::test]
async fn create_session_converts_and_returns_urls() {
    let app = test_app(true);

    let request = Request::builder()
        .method("POST")
        .uri("/payments")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "orderId": "O1",
                "currency": "usd",
                "items": [{"name": "Widget", "price": 19.99, "quantity": 2}]
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["url"], "https://checkout.example.com/c/pay/cs_test_1");
    assert_eq!(value["successUrl"], "https://shop.example.com/payments/success");
    assert_eq!(value["cancelUrl"], "https://shop.example.com/payments/cancelled");

    let received = app.gateway.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].order_id, "O1");
    assert_eq!(received[0].line_items[0].unit_amount, 1999);
    assert_eq!(received[0].line_items[0].quantity, 2);
}

#[tokio::test]
async fn create_session_rejects_empty_items_before_gateway() {
    let app = test_app(true);

    let request = Request::builder()
        .method("POST")
        .uri("/payments")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"orderId": "O1", "currency": "usd", "items": []}).to_string(),
        ))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.gateway.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn status_landing_acknowledges() {
    let app = test_app(true);

    let request = Request::builder()
        .method("GET")
        .uri("/payments/success")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["message"], "success");
}

// =============================================================================
// Webhook Pipeline
// =============================================================================

#[tokio::test]
async fn valid_webhook_publishes_canonical_event() {
    let app = test_app(true);
    let body = charge_succeeded_body("O1");
    let signature = sign(WEBHOOK_SECRET, chrono::Utc::now().timestamp(), &body);

    let status = post_webhook(&app, &body, Some(&signature)).await;

    assert_eq!(status, StatusCode::OK);
    let events = app.bus.published_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].order_id, "O1");
    assert_eq!(events[0].payment_id, "ch_int_1");
    assert_eq!(events[0].receipt_url, "https://pay.example.com/receipts/r1");
}

#[tokio::test]
async fn tampered_body_returns_400_and_publishes_nothing() {
    let app = test_app(true);
    let body = charge_succeeded_body("O1");
    let signature = sign(WEBHOOK_SECRET, chrono::Utc::now().timestamp(), &body);
    let tampered = body.replace("O1", "O2");

    let status = post_webhook(&app, &tampered, Some(&signature)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.bus.event_count(), 0);
}

#[tokio::test]
async fn missing_signature_header_returns_400() {
    let app = test_app(true);
    let body = charge_succeeded_body("O1");

    let status = post_webhook(&app, &body, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.bus.event_count(), 0);
}

#[tokio::test]
async fn unhandled_event_type_acknowledged_without_publish() {
    let app = test_app(true);
    let body = json!({
        "id": "evt_int_2",
        "type": "charge.refunded",
        "created": 1704067200,
        "data": {"object": {"id": "ch_int_2", "metadata": {"orderId": "O1"}}},
        "livemode": false
    })
    .to_string();
    let signature = sign(WEBHOOK_SECRET, chrono::Utc::now().timestamp(), &body);

    let status = post_webhook(&app, &body, Some(&signature)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.bus.event_count(), 0);
}

#[tokio::test]
async fn succeeded_charge_without_order_id_acknowledged_without_publish() {
    let app = test_app(true);
    let body = json!({
        "id": "evt_int_3",
        "type": "charge.succeeded",
        "created": 1704067200,
        "data": {"object": {"id": "ch_int_3", "metadata": {}}},
        "livemode": false
    })
    .to_string();
    let signature = sign(WEBHOOK_SECRET, chrono::Utc::now().timestamp(), &body);

    let status = post_webhook(&app, &body, Some(&signature)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.bus.event_count(), 0);
}

#[tokio::test]
async fn publish_failure_still_acknowledged_by_default_policy() {
    let app = test_app(true);
    app.bus.set_failing(true);
    let body = charge_succeeded_body("O1");
    let signature = sign(WEBHOOK_SECRET, chrono::Utc::now().timestamp(), &body);

    let status = post_webhook(&app, &body, Some(&signature)).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn publish_failure_returns_500_when_ack_disabled() {
    let app = test_app(false);
    app.bus.set_failing(true);
    let body = charge_succeeded_body("O1");
    let signature = sign(WEBHOOK_SECRET, chrono::Utc::now().timestamp(), &body);

    let status = post_webhook(&app, &body, Some(&signature)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn redelivered_webhook_publishes_again() {
    // At-least-once processor redelivery; dedup is a downstream concern.
    let app = test_app(true);
    let body = charge_succeeded_body("O1");
    let signature = sign(WEBHOOK_SECRET, chrono::Utc::now().timestamp(), &body);

    assert_eq!(post_webhook(&app, &body, Some(&signature)).await, StatusCode::OK);
    assert_eq!(post_webhook(&app, &body, Some(&signature)).await, StatusCode::OK);

    assert_eq!(app.bus.event_count(), 2);
}
