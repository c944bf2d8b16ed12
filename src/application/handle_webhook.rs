//! HandleWebhookHandler - verify, translate, and emit webhook events.
//!
//! Pipeline per delivery: verify the signature against the raw body
//! (gate), translate the verified event (pure mapping), publish the
//! canonical event (side effect). Verification failure terminates the
//! request before the claimed event type is ever inspected.

use std::sync::Arc;

use crate::domain::{translate, Translation, WebhookError, WebhookVerifier};
use crate::ports::{EventPublisher, PublishError};

/// Terminal outcome of one webhook delivery that passed verification.
#[derive(Debug)]
pub enum WebhookOutcome {
    /// A canonical event was published on the bus.
    Published,
    /// The event carried nothing for downstream consumers.
    Ignored,
    /// Translation produced an event but the bus publish failed. The
    /// HTTP layer decides whether to still acknowledge (policy).
    PublishFailed(PublishError),
}

/// Handler for the webhook entry path.
pub struct HandleWebhookHandler {
    verifier: Arc<WebhookVerifier>,
    publisher: Arc<dyn EventPublisher>,
}

impl HandleWebhookHandler {
    pub fn new(verifier: Arc<WebhookVerifier>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            verifier,
            publisher,
        }
    }

    /// Process one webhook delivery.
    ///
    /// `raw_body` must be the untouched request body; re-serializing
    /// parsed JSON invalidates the signature.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError` only for verification failures. Unhandled
    /// event types and publish failures are outcomes, not errors.
    pub async fn handle(
        &self,
        raw_body: &[u8],
        signature_header: &str,
    ) -> Result<WebhookOutcome, WebhookError> {
        let event = self.verifier.verify(raw_body, signature_header)?;

        match translate(&event) {
            Translation::Canonical(canonical) => {
                match self.publisher.publish(&canonical).await {
                    Ok(()) => {
                        tracing::info!(
                            event_id = %event.id,
                            order_id = %canonical.order_id,
                            payment_id = %canonical.payment_id,
                            "Payment event published"
                        );
                        Ok(WebhookOutcome::Published)
                    }
                    Err(e) => {
                        tracing::error!(
                            event_id = %event.id,
                            order_id = %canonical.order_id,
                            error = %e,
                            "Publish failed for translated payment event"
                        );
                        Ok(WebhookOutcome::PublishFailed(e))
                    }
                }
            }
            Translation::Ignored { reason } => {
                tracing::info!(event_id = %event.id, reason = %reason, "Webhook event ignored");
                Ok(WebhookOutcome::Ignored)
            }
        }
    }
}
