use anyhow::Result;
use prometheus::{
    Counter, Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder,
};
use rust_decimal::prelude::ToPrimitive;

use crate::domain::order::OrderPlaced;
use crate::messaging::OrderEventSubscriber;

// ============================================================================
// Metrics Module - Prometheus metrics for placed orders
// ============================================================================
//
// Tracks:
// - Orders placed (labelled by whether a discount applied)
// - Cumulative revenue
// - Distribution of order totals
//
// The registry is process-local; `render()` produces the text exposition
// format for printing at the end of a session.
// ============================================================================

pub struct OrderMetrics {
    registry: Registry,

    pub orders_placed: IntCounterVec,
    pub revenue_total: Counter,
    pub order_total: Histogram,
}

impl OrderMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let orders_placed = IntCounterVec::new(
            Opts::new("cafe_orders_placed_total", "Total orders placed"),
            &["discounted"],
        )?;
        registry.register(Box::new(orders_placed.clone()))?;

        let revenue_total = Counter::new(
            "cafe_order_revenue_total",
            "Cumulative revenue of placed orders",
        )?;
        registry.register(Box::new(revenue_total.clone()))?;

        let order_total = Histogram::with_opts(
            HistogramOpts::new("cafe_order_total", "Order total after pricing")
                .buckets(vec![1.0, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0, 7.5]),
        )?;
        registry.register(Box::new(order_total.clone()))?;

        Ok(Self {
            registry,
            orders_placed,
            revenue_total,
            order_total,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record one placed order
    pub fn record_order(&self, event: &OrderPlaced) {
        let discounted = if event.total < event.subtotal { "true" } else { "false" };
        self.orders_placed.with_label_values(&[discounted]).inc();

        let total = event.total.to_f64().unwrap_or_default();
        self.revenue_total.inc_by(total);
        self.order_total.observe(total);
    }

    /// Text exposition of every registered metric
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl OrderEventSubscriber for OrderMetrics {
    fn name(&self) -> &'static str {
        "metrics"
    }

    fn on_order_placed(&self, event: &OrderPlaced) -> Result<()> {
        self.record_order(event);
        Ok(())
    }
}
