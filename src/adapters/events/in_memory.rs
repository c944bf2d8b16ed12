//! In-memory event bus implementation for testing.
//!
//! Provides synchronous, deterministic event capture for unit and
//! integration tests. Not for production use: lock operations use
//! `.expect()` and will panic if poisoned.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::domain::CanonicalPaymentEvent;
use crate::ports::{EventPublisher, PublishError};

/// In-memory event bus for testing.
///
/// Captures published events for assertions and can be switched into a
/// failing mode to exercise publish-failure policy.
#[derive(Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<CanonicalPaymentEvent>>,
    failing: AtomicBool,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent publish fail (to test ack policy).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns all published events (for test assertions).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn published_events(&self) -> Vec<CanonicalPaymentEvent> {
        self.published
            .read()
            .expect("InMemoryEventBus: published lock poisoned")
            .clone()
    }

    /// Returns count of published events.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .expect("InMemoryEventBus: published lock poisoned")
            .len()
    }

    /// Clears all published events (for test isolation).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.published
            .write()
            .expect("InMemoryEventBus: published write lock poisoned")
            .clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: &CanonicalPaymentEvent) -> Result<(), PublishError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PublishError::Transport(
                "in-memory bus set to failing".to_string(),
            ));
        }

        self.published
            .write()
            .expect("InMemoryEventBus: published write lock poisoned")
            .push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> CanonicalPaymentEvent {
        CanonicalPaymentEvent {
            order_id: "O1".to_string(),
            payment_id: "ch_1".to_string(),
            receipt_url: "https://pay.example.com/receipts/r1".to_string(),
        }
    }

    #[tokio::test]
    async fn captures_published_events() {
        let bus = InMemoryEventBus::new();

        bus.publish(&sample_event()).await.unwrap();

        assert_eq!(bus.event_count(), 1);
        assert_eq!(bus.published_events()[0].order_id, "O1");
    }

    #[tokio::test]
    async fn failing_mode_rejects_publishes() {
        let bus = InMemoryEventBus::new();
        bus.set_failing(true);

        let result = bus.publish(&sample_event()).await;

        assert!(matches!(result, Err(PublishError::Transport(_))));
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn clear_resets_captured_events() {
        let bus = InMemoryEventBus::new();
        bus.publish(&sample_event()).await.unwrap();

        bus.clear();

        assert_eq!(bus.event_count(), 0);
    }
}
