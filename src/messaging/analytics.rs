use anyhow::Result;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::order::OrderPlaced;
use super::publisher::OrderEventSubscriber;

// ============================================================================
// In-Memory Order Analytics
// ============================================================================
//
// Accumulates order count and revenue for the lifetime of the process.
// Counters only ever grow; nothing is persisted.
//
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    pub orders_count: u64,
    pub revenue: Decimal,
}

#[derive(Debug, Default)]
pub struct InMemoryOrderAnalytics {
    totals: Mutex<AnalyticsSnapshot>,
}

impl InMemoryOrderAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders_count(&self) -> u64 {
        self.totals.lock().orders_count
    }

    pub fn revenue(&self) -> Decimal {
        self.totals.lock().revenue
    }

    pub fn snapshot(&self) -> AnalyticsSnapshot {
        *self.totals.lock()
    }
}

impl OrderEventSubscriber for InMemoryOrderAnalytics {
    fn name(&self) -> &'static str {
        "analytics"
    }

    fn on_order_placed(&self, event: &OrderPlaced) -> Result<()> {
        let mut totals = self.totals.lock();
        totals.orders_count += 1;
        totals.revenue += event.total;

        tracing::debug!(
            orders_count = totals.orders_count,
            revenue = %totals.revenue,
            "Analytics updated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Receipt;

    fn placed(total: Decimal) -> OrderPlaced {
        let mut receipt = Receipt::new();
        receipt.subtotal = total;
        receipt.total = total;
        OrderPlaced::from(&receipt)
    }

    #[test]
    fn test_starts_empty() {
        let analytics = InMemoryOrderAnalytics::new();
        assert_eq!(analytics.snapshot(), AnalyticsSnapshot::default());
    }

    #[test]
    fn test_accumulates_count_and_revenue() {
        let analytics = InMemoryOrderAnalytics::new();

        analytics.on_order_placed(&placed(Decimal::new(35, 1))).unwrap();
        analytics.on_order_placed(&placed(Decimal::new(2, 0))).unwrap();

        assert_eq!(analytics.orders_count(), 2);
        assert_eq!(analytics.revenue(), Decimal::new(550, 2));
    }
}
