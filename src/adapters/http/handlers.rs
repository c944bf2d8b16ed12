//! HTTP handlers for the payments endpoints.
//!
//! Connects axum routes to the application layer. The webhook handler
//! works on the raw request `Bytes` so signature verification sees the
//! exact bytes the processor signed.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::application::{
    CreateSessionError, CreateSessionHandler, HandleWebhookHandler, WebhookOutcome,
};
use crate::domain::{WebhookError, WebhookVerifier};
use crate::ports::{EventPublisher, PaymentGateway};

use super::dto::{CreateSessionRequest, CreateSessionResponse, ErrorResponse, StatusResponse};

/// Header carrying the processor's webhook signature.
const SIGNATURE_HEADER: &str = "Stripe-Signature";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for the payments API.
///
/// Cloned per request; all handles are Arc-wrapped, immutable, and safe
/// to share across concurrent invocations.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub publisher: Arc<dyn EventPublisher>,
    pub verifier: Arc<WebhookVerifier>,
    /// Whether a failed bus publish still acknowledges the webhook
    /// with 200 (default) instead of 500.
    pub ack_on_publish_failure: bool,
}

impl AppState {
    pub fn create_session_handler(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(self.gateway.clone())
    }

    pub fn webhook_handler(&self) -> HandleWebhookHandler {
        HandleWebhookHandler::new(self.verifier.clone(), self.publisher.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// `POST /payments` - create a hosted checkout session.
pub async fn create_payment_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, ApiError> {
    let session = state.create_session_handler().handle(request.into()).await?;
    Ok(Json(session.into()))
}

/// `GET /payments/:status` - landing acknowledgment for the success and
/// cancel redirects.
pub async fn payment_status(Path(status): Path<String>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ok: true,
        message: status,
    })
}

/// `POST /payments/webhook` - processor webhook entry point.
///
/// Responds 400 with a generic plain-text error on any verification
/// failure, 200 otherwise - including ignored event types, so the
/// processor does not redeliver events we deliberately skip.
pub async fn gateway_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Response {
    let Some(signature) = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) else {
        tracing::warn!("Webhook delivery without a signature header");
        return (
            StatusCode::BAD_REQUEST,
            "Webhook Error: missing signature header",
        )
            .into_response();
    };

    match state.webhook_handler().handle(&body, signature).await {
        Ok(WebhookOutcome::Published) | Ok(WebhookOutcome::Ignored) => {
            StatusCode::OK.into_response()
        }
        Ok(WebhookOutcome::PublishFailed(_)) => {
            if state.ack_on_publish_failure {
                // Dropping one internal event beats a redelivery storm;
                // downstream reconciliation is assumed.
                StatusCode::OK.into_response()
            } else {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
        Err(err) => webhook_rejection(err),
    }
}

fn webhook_rejection(err: WebhookError) -> Response {
    // Specific failure goes to the log; the unauthenticated caller only
    // sees the generic message.
    tracing::warn!(error = %err, "Webhook verification failed");
    (err.status_code(), err.public_message()).into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type converting application errors to HTTP responses.
pub struct ApiError(CreateSessionError);

impl From<CreateSessionError> for ApiError {
    fn from(err: CreateSessionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CreateSessionError::Validation(_) => StatusCode::BAD_REQUEST,
            CreateSessionError::Gateway(_) => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Checkout session creation failed");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
