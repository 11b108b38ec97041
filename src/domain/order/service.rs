use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::beverage::{apply_add_ons, Beverage, BeverageFactory};
use crate::domain::errors::CafeError;
use crate::domain::pricing::{PricingPolicy, PricingStrategies, PricingStrategy};
use crate::messaging::OrderEventPublisher;

use super::events::OrderPlaced;
use super::receipt::Receipt;
use super::value_objects::OrderStatus;

// ============================================================================
// Order Service
// ============================================================================
//
// Orchestrates: serve -> customize* -> set strategy + apply pricing -> issue
//
// One order is in flight per service. Calling `serve` again starts the next
// order in place; the selected pricing strategy carries over.
//
// ============================================================================

pub struct OrderService {
    factory: Box<dyn BeverageFactory>,
    strategies: PricingStrategies,
    publisher: Option<Arc<dyn OrderEventPublisher>>,

    beverage: Option<Box<dyn Beverage>>,
    pricing: Option<(PricingStrategy, Arc<dyn PricingPolicy>)>,
    receipt: Receipt,
    status: OrderStatus,
}

impl OrderService {
    pub fn new(factory: impl BeverageFactory + 'static, strategies: PricingStrategies) -> Self {
        Self {
            factory: Box::new(factory),
            strategies,
            publisher: None,
            beverage: None,
            pricing: None,
            receipt: Receipt::new(),
            status: OrderStatus::Empty,
        }
    }

    /// Publish an OrderPlaced event every time a receipt is issued
    pub fn with_publisher(mut self, publisher: Arc<dyn OrderEventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Start a new order with a freshly built base beverage
    pub fn serve(&mut self, beverage_type: &str) -> Result<(), CafeError> {
        let beverage = self.factory.create_beverage(beverage_type)?;

        self.receipt = Receipt::new();
        self.receipt.items.push(beverage.name());
        if let Some((strategy, _)) = &self.pricing {
            self.receipt.pricing = strategy.display_name().to_string();
        }
        self.beverage = Some(beverage);
        self.status = OrderStatus::Served;

        tracing::info!(
            order_id = %self.receipt.order_id,
            beverage = %beverage_type,
            "Beverage served"
        );

        Ok(())
    }

    /// Wrap the served beverage with each recognized add-on, in order
    pub fn customize<S: AsRef<str>>(&mut self, add_ons: &[S]) -> Result<(), CafeError> {
        let beverage = self.beverage.take().ok_or(CafeError::NotServed {
            operation: "customization",
        })?;

        let (beverage, applied) = apply_add_ons(beverage, add_ons);
        self.beverage = Some(beverage);

        if applied.is_empty() {
            return Ok(());
        }

        self.receipt
            .items
            .extend(applied.iter().map(|add_on| add_on.key().to_string()));
        self.status = OrderStatus::Customized;

        tracing::debug!(
            order_id = %self.receipt.order_id,
            applied = applied.len(),
            requested = add_ons.len(),
            "Beverage customized"
        );

        Ok(())
    }

    /// Select the pricing policy; the receipt shows its name right away
    pub fn set_pricing_strategy(&mut self, strategy: PricingStrategy) {
        let policy = self.strategies.get_strategy(strategy);
        self.pricing = Some((strategy, policy));
        self.receipt.pricing = strategy.display_name().to_string();

        tracing::debug!(
            order_id = %self.receipt.order_id,
            strategy = %strategy,
            "Pricing strategy selected"
        );
    }

    /// Price the fully decorated beverage and return the total
    pub fn apply_pricing(&mut self) -> Result<Decimal, CafeError> {
        let beverage = self.beverage.as_ref().ok_or(CafeError::NotServed {
            operation: "applying pricing",
        })?;
        let (strategy, policy) = self
            .pricing
            .as_ref()
            .ok_or(CafeError::PricingStrategyNotSet)?;

        let subtotal = beverage.cost();
        let total = policy.apply(subtotal);

        self.receipt.subtotal = subtotal;
        self.receipt.total = total;
        self.status = OrderStatus::Priced;

        tracing::info!(
            order_id = %self.receipt.order_id,
            subtotal = %subtotal,
            total = %total,
            strategy = %strategy,
            "Pricing applied"
        );

        Ok(total)
    }

    /// Snapshot of the current receipt.
    ///
    /// With a publisher wired, an OrderPlaced event goes out on every call
    /// before the snapshot is returned. A failing subscriber fails the call.
    pub fn issue_receipt(&mut self) -> Result<Receipt, CafeError> {
        if let Some(publisher) = &self.publisher {
            let event = OrderPlaced::from(&self.receipt);
            publisher.publish(&event).map_err(CafeError::Publish)?;
        }

        if self.status.has_beverage() {
            self.status = OrderStatus::Issued;
        }

        tracing::info!(
            order_id = %self.receipt.order_id,
            items = self.receipt.items.len(),
            total = %self.receipt.total,
            "Receipt issued"
        );

        Ok(self.receipt.clone())
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    pub fn beverage(&self) -> Option<&dyn Beverage> {
        self.beverage.as_deref()
    }

    /// Full description of the decorated beverage, if one is served
    pub fn describe_beverage(&self) -> Option<String> {
        self.beverage.as_ref().map(|beverage| beverage.describe())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
