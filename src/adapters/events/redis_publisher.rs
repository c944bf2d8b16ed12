//! Redis-backed event publisher for production deployments.
//!
//! Publishes canonical payment events on the `payment.succeeded` channel
//! as JSON. Fire-and-forget from the webhook handler's perspective: no
//! delivery confirmation beyond the PUBLISH command itself, durability is
//! the bus's concern.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::CanonicalPaymentEvent;
use crate::ports::{EventPublisher, PublishError};

/// Redis pub/sub event publisher.
#[derive(Clone)]
pub struct RedisEventPublisher {
    conn: MultiplexedConnection,
}

impl RedisEventPublisher {
    /// Create a new publisher over an established connection.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Connect to the bus at the given URL.
    pub async fn connect(url: &str) -> Result<Self, PublishError> {
        let client =
            redis::Client::open(url).map_err(|e| PublishError::Transport(e.to_string()))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, event: &CanonicalPaymentEvent) -> Result<(), PublishError> {
        let payload = serde_json::to_string(event)
            .map_err(|e| PublishError::Serialization(e.to_string()))?;

        let mut conn = self.conn.clone();
        conn.publish::<_, _, ()>(CanonicalPaymentEvent::TOPIC, payload)
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        tracing::debug!(
            order_id = %event.order_id,
            payment_id = %event.payment_id,
            topic = CanonicalPaymentEvent::TOPIC,
            "Canonical payment event published"
        );

        Ok(())
    }
}
