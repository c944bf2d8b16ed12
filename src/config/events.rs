//! Message bus configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Message bus configuration (Redis pub/sub)
#[derive(Debug, Clone, Deserialize)]
pub struct EventBusConfig {
    /// Bus connection URL
    pub url: String,

    /// Whether a failed publish still acknowledges the webhook with 200.
    ///
    /// The default trades an occasional dropped internal event for not
    /// triggering processor redelivery storms; downstream reconciliation
    /// is assumed. Set to false to answer 500 on publish failure so the
    /// processor redelivers.
    #[serde(default = "default_ack_on_publish_failure")]
    pub ack_on_publish_failure: bool,
}

impl EventBusConfig {
    /// Validate bus configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("EVENTS_URL"));
        }
        if !self.url.starts_with("redis://") && !self.url.starts_with("rediss://") {
            return Err(ValidationError::InvalidBusUrl);
        }
        Ok(())
    }
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            ack_on_publish_failure: default_ack_on_publish_failure(),
        }
    }
}

fn default_ack_on_publish_failure() -> bool {
    true
}
