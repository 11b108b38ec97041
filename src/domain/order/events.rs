use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::messaging::DomainEvent;
use super::receipt::Receipt;

// ============================================================================
// Order Events
// ============================================================================

/// Order Placed - emitted when a receipt is issued
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub order_id: Uuid,
    pub at: DateTime<Utc>,
    pub description: String,
    pub subtotal: Decimal,
    pub total: Decimal,
}

impl DomainEvent for OrderPlaced {
    fn event_type() -> &'static str { "OrderPlaced" }
    fn event_version() -> i32 { 1 }
}

impl From<&Receipt> for OrderPlaced {
    fn from(receipt: &Receipt) -> Self {
        Self {
            order_id: receipt.order_id,
            at: receipt.at,
            description: receipt.description(),
            subtotal: receipt.subtotal,
            total: receipt.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_placed_from_receipt() {
        let mut receipt = Receipt::new();
        receipt.items = vec!["espresso".into(), "milk".into()];
        receipt.subtotal = Decimal::new(290, 2);
        receipt.total = Decimal::new(290, 2);

        let event = OrderPlaced::from(&receipt);

        assert_eq!(event.order_id, receipt.order_id);
        assert_eq!(event.at, receipt.at);
        assert_eq!(event.description, "espresso, milk");
        assert_eq!(event.subtotal, Decimal::new(290, 2));
        assert_eq!(event.total, Decimal::new(290, 2));
    }

    #[test]
    fn test_event_type() {
        assert_eq!(OrderPlaced::event_type(), "OrderPlaced");
        assert_eq!(OrderPlaced::event_version(), 1);
    }
}
