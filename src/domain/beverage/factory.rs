use crate::domain::errors::CafeError;

use super::decorator::Beverage;
use super::value_objects::BaseBeverage;

// ============================================================================
// Beverage Factory
// ============================================================================

/// Builds a fresh base beverage from a menu key
pub trait BeverageFactory {
    fn create_beverage(&self, beverage_type: &str) -> Result<Box<dyn Beverage>, CafeError>;
}

/// Factory backed by the fixed café menu (espresso, tea, hotchocolate)
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuBeverageFactory;

impl MenuBeverageFactory {
    pub fn new() -> Self {
        Self
    }
}

impl BeverageFactory for MenuBeverageFactory {
    fn create_beverage(&self, beverage_type: &str) -> Result<Box<dyn Beverage>, CafeError> {
        BaseBeverage::from_key(beverage_type)
            .map(|beverage| Box::new(beverage) as Box<dyn Beverage>)
            .ok_or_else(|| CafeError::UnknownBeverage(beverage_type.to_string()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
