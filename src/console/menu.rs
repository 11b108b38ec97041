use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::ReceiptFormat;
use crate::domain::beverage::{AddOn, BaseBeverage};
use crate::domain::order::OrderService;
use crate::domain::pricing::PricingStrategy;
use crate::messaging::InMemoryOrderAnalytics;
use crate::metrics::OrderMetrics;

use super::input::LineInput;
use super::receipt_view::{render_receipt, render_receipt_json};

const INVALID_SELECTION: &str = "Invalid selection. Please try again.";

// ============================================================================
// Main Menu - drives one OrderService through repeated orders
// ============================================================================

pub struct MainMenu<R, W> {
    service: OrderService,
    input: LineInput<R>,
    out: W,
    receipt_format: ReceiptFormat,
    analytics: Option<Arc<InMemoryOrderAnalytics>>,
    metrics: Option<Arc<OrderMetrics>>,
}

impl<R: BufRead, W: Write> MainMenu<R, W> {
    pub fn new(service: OrderService, reader: R, out: W) -> Self {
        Self {
            service,
            input: LineInput::new(reader),
            out,
            receipt_format: ReceiptFormat::Text,
            analytics: None,
            metrics: None,
        }
    }

    pub fn with_receipt_format(mut self, format: ReceiptFormat) -> Self {
        self.receipt_format = format;
        self
    }

    /// Print the analytics summary when the session ends
    pub fn with_analytics(mut self, analytics: Arc<InMemoryOrderAnalytics>) -> Self {
        self.analytics = Some(analytics);
        self
    }

    /// Print Prometheus metrics when the session ends
    pub fn with_metrics(mut self, metrics: Arc<OrderMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Take orders until the customer says no or input runs out
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.start()?;
            if !self.take_order()? {
                break;
            }
            if !self.restart_process()? {
                break;
            }
        }
        self.end()
    }

    /// One full order; `false` when input ran out part way through
    fn take_order(&mut self) -> Result<bool> {
        let Some(beverage) = self.select_beverage()? else {
            return Ok(false);
        };
        self.service
            .serve(beverage.key())
            .context("serving selected beverage")?;

        let Some(add_ons) = self.select_add_ons()? else {
            return Ok(false);
        };
        let keys: Vec<&str> = add_ons.iter().map(|add_on| add_on.key()).collect();
        self.service.customize(&keys)?;

        let Some(strategy) = self.select_pricing()? else {
            return Ok(false);
        };
        self.service.set_pricing_strategy(strategy);
        self.service.apply_pricing()?;

        self.print_receipt()?;
        Ok(true)
    }

    fn start(&mut self) -> Result<()> {
        writeln!(self.out, "=== Coffee Console Started ===")?;
        writeln!(self.out)?;
        writeln!(self.out, "Please provide your order details")?;
        Ok(())
    }

    fn select_beverage(&mut self) -> Result<Option<BaseBeverage>> {
        writeln!(self.out, "=== Available Beverages ===")?;
        writeln!(self.out)?;
        for (index, beverage) in BaseBeverage::ALL.iter().enumerate() {
            writeln!(
                self.out,
                "{}. {} (base ${:.2})",
                index + 1,
                beverage.title(),
                beverage.base_cost()
            )?;
        }
        writeln!(self.out, "===/===")?;
        writeln!(self.out)?;

        loop {
            let Some(input) = self.input.request(&mut self.out)? else {
                return Ok(None);
            };
            match menu_index(&input, BaseBeverage::ALL.len()) {
                Some(index) => return Ok(Some(BaseBeverage::ALL[index])),
                None => writeln!(self.out, "{INVALID_SELECTION}")?,
            }
        }
    }

    fn select_add_ons(&mut self) -> Result<Option<Vec<AddOn>>> {
        writeln!(self.out, "=== Available AddOns ===")?;
        writeln!(self.out)?;
        for (index, add_on) in AddOn::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {} (+{:.2})", index + 1, add_on.title(), add_on.increment())?;
        }
        writeln!(self.out, "0. Done")?;
        writeln!(self.out, "===/===")?;

        let mut selected = Vec::new();
        loop {
            let Some(input) = self.input.request(&mut self.out)? else {
                return Ok(None);
            };
            if input == "0" {
                return Ok(Some(selected));
            }
            match menu_index(&input, AddOn::ALL.len()) {
                Some(index) => selected.push(AddOn::ALL[index]),
                None => writeln!(self.out, "{INVALID_SELECTION}")?,
            }
        }
    }

    fn select_pricing(&mut self) -> Result<Option<PricingStrategy>> {
        writeln!(self.out, "=== Select Pricing Type ===")?;
        writeln!(self.out)?;
        writeln!(self.out, "1. Regular")?;
        writeln!(self.out, "2. Happy Hour")?;
        writeln!(self.out, "===/===")?;

        loop {
            let Some(input) = self.input.request(&mut self.out)? else {
                return Ok(None);
            };
            let strategy = input
                .parse::<u8>()
                .ok()
                .and_then(|key| PricingStrategy::try_from(key).ok());
            match strategy {
                Some(strategy) => return Ok(Some(strategy)),
                None => writeln!(self.out, "{INVALID_SELECTION}")?,
            }
        }
    }

    fn print_receipt(&mut self) -> Result<()> {
        writeln!(self.out, "=== Printing Receipt ===")?;
        let receipt = self.service.issue_receipt()?;
        match self.receipt_format {
            ReceiptFormat::Text => write!(self.out, "{}", render_receipt(&receipt))?,
            ReceiptFormat::Json => writeln!(self.out, "{}", render_receipt_json(&receipt)?)?,
        }
        writeln!(self.out, "===/===")?;
        self.out.flush()?;
        Ok(())
    }

    fn restart_process(&mut self) -> Result<bool> {
        writeln!(self.out, "=== Order finished ===")?;
        writeln!(self.out, "Do you want to order something else?")?;
        writeln!(self.out, "1. Yes")?;
        writeln!(self.out, "2. No")?;
        writeln!(self.out, "===/===")?;

        let Some(input) = self.input.request(&mut self.out)? else {
            return Ok(false);
        };
        match input.as_str() {
            "1" => Ok(true),
            "2" => Ok(false),
            _ => {
                writeln!(self.out, "Invalid selection. Exiting.")?;
                Ok(false)
            }
        }
    }

    fn end(&mut self) -> Result<()> {
        writeln!(self.out, "=== Coffee Console Ended ===")?;

        if let Some(analytics) = &self.analytics {
            let snapshot = analytics.snapshot();
            writeln!(
                self.out,
                "=== Analytics for {} ===",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            )?;
            writeln!(self.out, "Total Orders: {}", snapshot.orders_count)?;
            writeln!(self.out, "Total Revenue: ${:.2}", snapshot.revenue)?;
            writeln!(self.out, "===/===")?;
        }

        if let Some(metrics) = &self.metrics {
            writeln!(self.out, "=== Metrics ===")?;
            write!(self.out, "{}", metrics.render()?)?;
            writeln!(self.out, "===/===")?;
        }

        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// 1-based menu number to 0-based index
fn menu_index(input: &str, len: usize) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n - 1),
        _ => None,
    }
}
