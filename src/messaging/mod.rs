// ============================================================================
// Messaging - OrderPlaced fan-out
// ============================================================================
//
// Synchronous, in-process publish/subscribe:
// - event.rs            - DomainEvent trait and JSON payload helper
// - publisher.rs        - Publisher trait, subscriber trait, simple fan-out
// - console_observer.rs - Prints one line per placed order
// - analytics.rs        - In-memory order count and revenue
//
// ============================================================================

mod analytics;
mod console_observer;
mod event;
mod publisher;

pub use analytics::{AnalyticsSnapshot, InMemoryOrderAnalytics};
pub use console_observer::ConsoleOrderObserver;
pub use event::{serialize_event, DomainEvent};
pub use publisher::{OrderEventPublisher, OrderEventSubscriber, SimpleOrderEventPublisher};
