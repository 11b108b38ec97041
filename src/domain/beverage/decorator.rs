use rust_decimal::Decimal;

use super::value_objects::{AddOn, BaseBeverage};

// ============================================================================
// Beverage Trait - anything that can be priced and described
// ============================================================================

pub trait Beverage {
    /// Display name, e.g. "espresso with added milk"
    fn name(&self) -> String;

    fn cost(&self) -> Decimal;

    fn describe(&self) -> String;
}

impl Beverage for BaseBeverage {
    fn name(&self) -> String {
        self.key().to_string()
    }

    fn cost(&self) -> Decimal {
        self.base_cost()
    }

    fn describe(&self) -> String {
        self.description().to_string()
    }
}

// ============================================================================
// Add-on Decorator
// ============================================================================

/// Wraps an inner beverage with exactly one add-on.
///
/// Each decorator owns its inner beverage, so stacking add-ons nests wrappers
/// and `cost()`/`describe()` recurse down to the base drink.
pub struct Decorated {
    inner: Box<dyn Beverage>,
    add_on: AddOn,
}

impl Decorated {
    pub fn new(inner: Box<dyn Beverage>, add_on: AddOn) -> Self {
        Self { inner, add_on }
    }

    pub fn add_on(&self) -> AddOn {
        self.add_on
    }
}

impl Beverage for Decorated {
    fn name(&self) -> String {
        format!("{} with added {}", self.inner.name(), self.add_on.display_name())
    }

    fn cost(&self) -> Decimal {
        self.inner.cost() + self.add_on.increment()
    }

    fn describe(&self) -> String {
        format!("{} Added {}.", self.inner.describe(), self.add_on.description())
    }
}

/// Wrap `beverage` once per recognized add-on key, in order.
///
/// Keys that are not on the menu are skipped without error. Returns the
/// decorated beverage and the add-ons that were actually applied.
pub fn apply_add_ons<S: AsRef<str>>(
    beverage: Box<dyn Beverage>,
    add_ons: &[S],
) -> (Box<dyn Beverage>, Vec<AddOn>) {
    let mut beverage = beverage;
    let mut applied = Vec::with_capacity(add_ons.len());

    for key in add_ons {
        let key = key.as_ref();
        match AddOn::from_key(key) {
            Some(add_on) => {
                beverage = Box::new(Decorated::new(beverage, add_on));
                applied.push(add_on);
            }
            None => {
                tracing::debug!(add_on = %key, "Ignoring unknown add-on");
            }
        }
    }

    (beverage, applied)
}

// ============================================================================
// Unit Tests
// ============================================================================
