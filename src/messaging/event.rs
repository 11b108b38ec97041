use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

// ============================================================================
// Domain Event Trait
// ============================================================================

/// All events carried over the bus implement this trait.
pub trait DomainEvent: Serialize + DeserializeOwned + Clone + Send + Sync {
    fn event_type() -> &'static str where Self: Sized;
    fn event_version() -> i32 where Self: Sized { 1 }
}

// ============================================================================
// Event Serialization Helpers
// ============================================================================

pub fn serialize_event<E: Serialize>(event: &E) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}
