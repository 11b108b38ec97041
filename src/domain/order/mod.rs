// ============================================================================
// Order Domain - One café order from serve to receipt
// ============================================================================
//
// - Value objects (OrderStatus)
// - Receipt (mutable record of the in-flight order)
// - Events (OrderPlaced)
// - Service (serve -> customize -> price -> issue receipt)
//
// ============================================================================

pub mod events;
pub mod receipt;
pub mod service;
pub mod value_objects;

pub use events::*;
pub use receipt::*;
pub use service::*;
pub use value_objects::*;
