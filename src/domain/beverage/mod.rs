// ============================================================================
// Beverage Domain - Drinks, Add-ons and Construction
// ============================================================================
//
// - Value objects (BaseBeverage, AddOn, menu prices)
// - Beverage trait with the add-on decorator
// - Factory (string key -> fresh base beverage)
//
// ============================================================================

pub mod decorator;
pub mod factory;
pub mod value_objects;

pub use decorator::*;
pub use factory::*;
pub use value_objects::*;
