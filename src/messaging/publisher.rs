use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::order::OrderPlaced;

use super::event::DomainEvent;

// ============================================================================
// Publisher / Subscriber Contracts
// ============================================================================

/// Receives every OrderPlaced event delivered by a publisher
pub trait OrderEventSubscriber: Send + Sync {
    /// Short name used in logs and error context
    fn name(&self) -> &'static str;

    fn on_order_placed(&self, event: &OrderPlaced) -> Result<()>;
}

pub trait OrderEventPublisher: Send + Sync {
    fn publish(&self, event: &OrderPlaced) -> Result<()>;
}

// ============================================================================
// Simple Publisher - synchronous fan-out in registration order
// ============================================================================

#[derive(Default)]
pub struct SimpleOrderEventPublisher {
    subscribers: Vec<Arc<dyn OrderEventSubscriber>>,
}

impl SimpleOrderEventPublisher {
    pub fn new(subscribers: Vec<Arc<dyn OrderEventSubscriber>>) -> Self {
        Self { subscribers }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_subscriber(mut self, subscriber: Arc<dyn OrderEventSubscriber>) -> Self {
        self.subscribe(subscriber);
        self
    }

    pub fn subscribe(&mut self, subscriber: Arc<dyn OrderEventSubscriber>) {
        tracing::debug!(subscriber = subscriber.name(), "Subscriber registered");
        self.subscribers.push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl OrderEventPublisher for SimpleOrderEventPublisher {
    /// Stops at the first subscriber error and returns it; later subscribers
    /// do not see the event.
    fn publish(&self, event: &OrderPlaced) -> Result<()> {
        let event_type = OrderPlaced::event_type();
        let event_version = OrderPlaced::event_version();

        tracing::debug!(
            order_id = %event.order_id,
            event_type,
            event_version,
            subscribers = self.subscribers.len(),
            "Publishing event"
        );

        for subscriber in &self.subscribers {
            subscriber.on_order_placed(event).with_context(|| {
                format!(
                    "subscriber '{}' failed on {} v{}",
                    subscriber.name(),
                    event_type,
                    event_version
                )
            })?;
        }

        Ok(())
    }
}
