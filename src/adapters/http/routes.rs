//! Axum router configuration for the payments API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_payment_session, gateway_webhook, payment_status, AppState};

/// Create the payments API router.
///
/// # Routes
///
/// - `POST /` - create a hosted checkout session
/// - `POST /webhook` - processor webhook (no auth, signature verified)
/// - `GET /:status` - success/cancel redirect acknowledgment
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_payment_session))
        .route("/webhook", post(gateway_webhook))
        .route("/:status", get(payment_status))
}
