// ============================================================================
// Pricing Domain - Strategy keys and policies
// ============================================================================

pub mod strategy;

pub use strategy::*;
