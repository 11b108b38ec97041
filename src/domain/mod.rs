// ============================================================================
// Domain Layer - Café Ordering Logic
// ============================================================================
//
// Each area has its own subdirectory:
// - beverage/ - Beverages, add-on decorators, factory
// - pricing/  - Pricing strategy keys and policies
// - order/    - Receipt, OrderPlaced event, order service
//
// Console I/O and event delivery live outside this layer.
//
// ============================================================================

pub mod beverage;
pub mod errors;
pub mod order;
pub mod pricing;

pub use errors::{CafeError, ErrorKind};
