//! EventPublisher port - interface for publishing canonical payment events.
//!
//! The domain publishes events without knowing the underlying transport
//! (in-memory bus for tests, Redis pub/sub in production).

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CanonicalPaymentEvent;

/// Failure to hand an event to the message bus.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The bus connection or publish command failed.
    #[error("publish failed: {0}")]
    Transport(String),

    /// The event could not be serialized for the wire.
    #[error("event serialization failed: {0}")]
    Serialization(String),
}

/// Port for publishing canonical payment events.
///
/// Contract:
/// - Exactly one publish call per translated, non-ignored event per
///   webhook delivery received.
/// - The processor redelivers webhooks at-least-once, so downstream
///   consumers may see duplicate canonical events; deduplication is
///   explicitly their responsibility, not this service's.
/// - Durability of published events is the bus's responsibility.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish one canonical payment event on its topic.
    async fn publish(&self, event: &CanonicalPaymentEvent) -> Result<(), PublishError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn EventPublisher) {}

    #[test]
    fn publish_error_display() {
        let err = PublishError::Transport("broken pipe".to_string());
        assert_eq!(err.to_string(), "publish failed: broken pipe");
    }
}
