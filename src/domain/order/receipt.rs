use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Receipt - one per order
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub order_id: Uuid,
    pub at: DateTime<Utc>,

    /// Base beverage label first, then each applied add-on key in order
    pub items: Vec<String>,

    pub subtotal: Decimal,
    pub pricing: String,
    pub total: Decimal,
}

impl Receipt {
    pub fn new() -> Self {
        Self {
            order_id: Uuid::new_v4(),
            at: Utc::now(),
            items: Vec::new(),
            subtotal: Decimal::ZERO,
            pricing: String::new(),
            total: Decimal::ZERO,
        }
    }

    /// Human-readable item list, e.g. "espresso, milk, extrashot"
    pub fn description(&self) -> String {
        self.items.join(", ")
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_receipt_is_blank() {
        let receipt = Receipt::new();
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.subtotal, Decimal::ZERO);
        assert_eq!(receipt.total, Decimal::ZERO);
        assert!(receipt.pricing.is_empty());
    }

    #[test]
    fn test_order_ids_are_unique() {
        assert_ne!(Receipt::new().order_id, Receipt::new().order_id);
    }

    #[test]
    fn test_description_joins_items() {
        let mut receipt = Receipt::new();
        receipt.items = vec!["espresso".into(), "milk".into(), "extrashot".into()];
        assert_eq!(receipt.description(), "espresso, milk, extrashot");
    }

    #[test]
    fn test_receipt_serialization() {
        let mut receipt = Receipt::new();
        receipt.items.push("tea".to_string());
        receipt.subtotal = Decimal::new(200, 2);
        receipt.total = Decimal::new(160, 2);
        receipt.pricing = "Happy Hour (-20%)".to_string();

        let json = serde_json::to_string(&receipt).unwrap();
        let deserialized: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, deserialized);
    }
}
