//! Payment processor configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment processor configuration (gateway credentials and redirect URLs)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Gateway secret API key (sk_live_... or sk_test_...)
    pub secret_key: String,

    /// Webhook signing secret shared with the processor (whsec_...)
    pub webhook_secret: String,

    /// Redirect target after a successful checkout
    pub success_url: String,

    /// Redirect target after a cancelled checkout
    pub cancel_url: String,
}

impl PaymentConfig {
    /// Check if using gateway test mode
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Check if using gateway live mode
    pub fn is_live_mode(&self) -> bool {
        self.secret_key.starts_with("sk_live_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secret_key.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT_SECRET_KEY"));
        }
        if self.webhook_secret.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT_WEBHOOK_SECRET"));
        }

        // Verify key prefixes before the first outbound call fails cryptically
        if !self.secret_key.starts_with("sk_") {
            return Err(ValidationError::InvalidGatewayKey);
        }
        if !self.webhook_secret.starts_with("whsec_") {
            return Err(ValidationError::InvalidWebhookSecret);
        }

        if !self.success_url.starts_with("http") {
            return Err(ValidationError::InvalidRedirectUrl("success_url"));
        }
        if !self.cancel_url.starts_with("http") {
            return Err(ValidationError::InvalidRedirectUrl("cancel_url"));
        }

        Ok(())
    }
}
