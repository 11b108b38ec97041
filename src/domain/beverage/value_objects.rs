use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Beverage Value Objects
// ============================================================================

/// Syrup comes in a single flavor for now.
pub const SYRUP_FLAVOR: &str = "vanilla";

/// Drinks that can be served on their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseBeverage {
    Espresso,
    Tea,
    HotChocolate,
}

impl BaseBeverage {
    pub const ALL: [BaseBeverage; 3] = [
        BaseBeverage::Espresso,
        BaseBeverage::Tea,
        BaseBeverage::HotChocolate,
    ];

    /// Case-insensitive lookup by menu key
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|beverage| beverage.key().eq_ignore_ascii_case(key))
    }

    pub fn key(&self) -> &'static str {
        match self {
            BaseBeverage::Espresso => "espresso",
            BaseBeverage::Tea => "tea",
            BaseBeverage::HotChocolate => "hotchocolate",
        }
    }

    pub fn base_cost(&self) -> Decimal {
        match self {
            BaseBeverage::Espresso => Decimal::new(250, 2),
            BaseBeverage::Tea => Decimal::new(200, 2),
            BaseBeverage::HotChocolate => Decimal::new(300, 2),
        }
    }

    /// Title shown on the console menu
    pub fn title(&self) -> &'static str {
        match self {
            BaseBeverage::Espresso => "Espresso",
            BaseBeverage::Tea => "Tea",
            BaseBeverage::HotChocolate => "Hot Chocolate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BaseBeverage::Espresso => "A strong and bold espresso shot.",
            BaseBeverage::Tea => "A soothing cup of freshly brewed tea.",
            BaseBeverage::HotChocolate => "A warm and comforting hot chocolate.",
        }
    }
}

/// Extras that wrap a beverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOn {
    Milk,
    Syrup,
    ExtraShot,
}

impl AddOn {
    pub const ALL: [AddOn; 3] = [AddOn::Milk, AddOn::Syrup, AddOn::ExtraShot];

    /// Case-insensitive lookup by menu key; `None` for anything off the menu
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|add_on| add_on.key().eq_ignore_ascii_case(key))
    }

    /// Canonical label recorded on the receipt
    pub fn key(&self) -> &'static str {
        match self {
            AddOn::Milk => "milk",
            AddOn::Syrup => "syrup",
            AddOn::ExtraShot => "extrashot",
        }
    }

    /// Name fragment used in "<drink> with added <name>"
    pub fn display_name(&self) -> &'static str {
        match self {
            AddOn::Milk => "milk",
            AddOn::Syrup => "syrup",
            AddOn::ExtraShot => "extra shot",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AddOn::Milk => "Milk",
            AddOn::Syrup => "Syrup",
            AddOn::ExtraShot => "Extra Shot",
        }
    }

    pub fn increment(&self) -> Decimal {
        match self {
            AddOn::Milk => Decimal::new(40, 2),
            AddOn::Syrup => Decimal::new(50, 2),
            AddOn::ExtraShot => Decimal::new(80, 2),
        }
    }

    pub fn description(&self) -> String {
        match self {
            AddOn::Milk => "a splash of creamy milk".to_string(),
            AddOn::Syrup => format!("a sweet drop of syrup with added {}", SYRUP_FLAVOR),
            AddOn::ExtraShot => "an extra shot of espresso".to_string(),
        }
    }
}

/// Unit price of a receipt label: base cost for a drink, increment for an add-on
pub fn menu_price(label: &str) -> Option<Decimal> {
    BaseBeverage::from_key(label)
        .map(|beverage| beverage.base_cost())
        .or_else(|| AddOn::from_key(label).map(|add_on| add_on.increment()))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("espresso", BaseBeverage::Espresso)]
    #[case("ESPRESSO", BaseBeverage::Espresso)]
    #[case("Tea", BaseBeverage::Tea)]
    #[case("HotChocolate", BaseBeverage::HotChocolate)]
    #[case("  hotchocolate ", BaseBeverage::HotChocolate)]
    fn test_base_beverage_from_key(#[case] key: &str, #[case] expected: BaseBeverage) {
        assert_eq!(BaseBeverage::from_key(key), Some(expected));
    }

    #[test]
    fn test_base_beverage_unknown_key() {
        assert_eq!(BaseBeverage::from_key("latte"), None);
        assert_eq!(BaseBeverage::from_key("hot chocolate"), None);
        assert_eq!(BaseBeverage::from_key(""), None);
    }

    #[rstest]
    #[case("milk", AddOn::Milk)]
    #[case("Syrup", AddOn::Syrup)]
    #[case("EXTRASHOT", AddOn::ExtraShot)]
    fn test_add_on_from_key(#[case] key: &str, #[case] expected: AddOn) {
        assert_eq!(AddOn::from_key(key), Some(expected));
    }

    #[test]
    fn test_add_on_increments() {
        assert_eq!(AddOn::Milk.increment(), Decimal::new(40, 2));
        assert_eq!(AddOn::Syrup.increment(), Decimal::new(50, 2));
        assert_eq!(AddOn::ExtraShot.increment(), Decimal::new(80, 2));
    }

    #[test]
    fn test_syrup_description_uses_fixed_flavor() {
        assert!(AddOn::Syrup.description().ends_with("vanilla"));
    }

    #[test]
    fn test_menu_price() {
        assert_eq!(menu_price("espresso"), Some(Decimal::new(250, 2)));
        assert_eq!(menu_price("Tea"), Some(Decimal::new(2, 0)));
        assert_eq!(menu_price("extrashot"), Some(Decimal::new(8, 1)));
        assert_eq!(menu_price("whipped cream"), None);
    }

    #[test]
    fn test_add_on_serialization() {
        let json = serde_json::to_string(&AddOn::ExtraShot).unwrap();
        assert_eq!(json, "\"extrashot\"");
        let deserialized: AddOn = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, AddOn::ExtraShot);
    }
}
