//! Webhook verification error types.
//!
//! Any verification failure terminates the request before event-type
//! dispatch. The processor-facing response body is deliberately generic so
//! verification internals are not leaked to unauthenticated callers.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors raised while authenticating an inbound webhook.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Signature did not match the payload.
    #[error("invalid signature")]
    InvalidSignature,

    /// Signature timestamp is older than the replay window.
    #[error("timestamp out of range")]
    TimestampOutOfRange,

    /// Signature timestamp is in the future beyond clock skew tolerance.
    #[error("invalid timestamp")]
    InvalidTimestamp,

    /// Signature header or payload could not be parsed.
    #[error("parse error: {0}")]
    ParseError(String),
}

impl WebhookError {
    /// HTTP status the webhook endpoint responds with.
    ///
    /// All verification failures map to 400; the processor treats any
    /// non-2xx as a delivery failure and will redeliver later.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Processor-facing error body.
    ///
    /// Always the same generic message; the specific failure is logged
    /// server-side instead.
    pub fn public_message(&self) -> &'static str {
        "Webhook Error: signature verification failed"
    }
}
