use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::errors::CafeError;

// ============================================================================
// Pricing Strategy Key
// ============================================================================

/// Selects a pricing policy. Carries its own display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingStrategy {
    Regular,
    HappyHour,
}

impl PricingStrategy {
    pub fn display_name(&self) -> &'static str {
        match self {
            PricingStrategy::Regular => "Regular Pricing",
            PricingStrategy::HappyHour => "Happy Hour (-20%)",
        }
    }
}

impl fmt::Display for PricingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PricingStrategy {
    type Err = CafeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(PricingStrategy::Regular),
            "happyhour" | "happy-hour" | "happy_hour" => Ok(PricingStrategy::HappyHour),
            _ => Err(CafeError::UnknownPricingStrategy(s.to_string())),
        }
    }
}

/// Numeric keys as shown on the pricing menu (1 = Regular, 2 = Happy Hour)
impl TryFrom<u8> for PricingStrategy {
    type Error = CafeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PricingStrategy::Regular),
            2 => Ok(PricingStrategy::HappyHour),
            other => Err(CafeError::UnknownPricingStrategy(other.to_string())),
        }
    }
}

// ============================================================================
// Pricing Policies
// ============================================================================

/// Pure subtotal -> total transformation
pub trait PricingPolicy: Send + Sync {
    fn apply(&self, subtotal: Decimal) -> Decimal;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RegularPricing;

impl PricingPolicy for RegularPricing {
    fn apply(&self, subtotal: Decimal) -> Decimal {
        subtotal
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HappyHourPricing;

impl PricingPolicy for HappyHourPricing {
    fn apply(&self, subtotal: Decimal) -> Decimal {
        subtotal * Decimal::new(8, 1)
    }
}

/// One shared, immutable instance per policy.
///
/// Build once at startup and hand a clone to every order service.
#[derive(Clone)]
pub struct PricingStrategies {
    regular: Arc<dyn PricingPolicy>,
    happy_hour: Arc<dyn PricingPolicy>,
}

impl Default for PricingStrategies {
    fn default() -> Self {
        Self {
            regular: Arc::new(RegularPricing),
            happy_hour: Arc::new(HappyHourPricing),
        }
    }
}

impl PricingStrategies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_strategy(&self, strategy: PricingStrategy) -> Arc<dyn PricingPolicy> {
        match strategy {
            PricingStrategy::Regular => Arc::clone(&self.regular),
            PricingStrategy::HappyHour => Arc::clone(&self.happy_hour),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ErrorKind;
    use rstest::rstest;

    #[test]
    fn test_regular_is_identity() {
        let strategies = PricingStrategies::new();
        let regular = strategies.get_strategy(PricingStrategy::Regular);

        assert_eq!(regular.apply(Decimal::new(10, 0)), Decimal::new(10, 0));
        assert_eq!(regular.apply(Decimal::new(370, 2)), Decimal::new(370, 2));
    }

    #[test]
    fn test_happy_hour_is_twenty_percent_off() {
        let strategies = PricingStrategies::new();
        let happy_hour = strategies.get_strategy(PricingStrategy::HappyHour);

        assert_eq!(happy_hour.apply(Decimal::new(10, 0)), Decimal::new(8, 0));
        assert_eq!(happy_hour.apply(Decimal::new(250, 2)), Decimal::new(200, 2));
    }

    #[test]
    fn test_strategies_are_shared_instances() {
        let strategies = PricingStrategies::new();
        let a = strategies.get_strategy(PricingStrategy::HappyHour);
        let b = strategies.clone().get_strategy(PricingStrategy::HappyHour);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PricingStrategy::Regular.display_name(), "Regular Pricing");
        assert_eq!(PricingStrategy::HappyHour.display_name(), "Happy Hour (-20%)");
        assert_eq!(PricingStrategy::HappyHour.to_string(), "Happy Hour (-20%)");
    }

    #[rstest]
    #[case("regular", PricingStrategy::Regular)]
    #[case("Regular", PricingStrategy::Regular)]
    #[case("HappyHour", PricingStrategy::HappyHour)]
    #[case("happy-hour", PricingStrategy::HappyHour)]
    #[case(" happy_hour ", PricingStrategy::HappyHour)]
    fn test_parse_strategy(#[case] input: &str, #[case] expected: PricingStrategy) {
        assert_eq!(input.parse::<PricingStrategy>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_strategy_is_out_of_range() {
        let err = "loyalty".parse::<PricingStrategy>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(err, CafeError::UnknownPricingStrategy(_)));

        let err = PricingStrategy::try_from(3u8).unwrap_err();
        assert!(matches!(err, CafeError::UnknownPricingStrategy(ref s) if s == "3"));
    }

    #[test]
    fn test_numeric_keys() {
        assert_eq!(PricingStrategy::try_from(1u8).unwrap(), PricingStrategy::Regular);
        assert_eq!(PricingStrategy::try_from(2u8).unwrap(), PricingStrategy::HappyHour);
    }
}
