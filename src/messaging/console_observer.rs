use std::io::{self, Write};

use anyhow::Result;
use parking_lot::Mutex;

use crate::domain::order::OrderPlaced;
use super::event::serialize_event;
use super::publisher::OrderEventSubscriber;

// ============================================================================
// Console Order Observer
// ============================================================================

/// Writes one summary line per placed order, stdout by default
pub struct ConsoleOrderObserver {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleOrderObserver {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn format_line(event: &OrderPlaced) -> String {
        format!(
            "[{}] Order {} subtotal ${:.2} total ${:.2}",
            event.at.format("%H:%M:%S"),
            event.order_id,
            event.subtotal,
            event.total
        )
    }
}

impl Default for ConsoleOrderObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderEventSubscriber for ConsoleOrderObserver {
    fn name(&self) -> &'static str {
        "console"
    }

    fn on_order_placed(&self, event: &OrderPlaced) -> Result<()> {
        tracing::info!(
            order_id = %event.order_id,
            total = %event.total,
            "Order placed"
        );
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!(payload = %serialize_event(event)?, "OrderPlaced payload");
        }

        let mut out = self.out.lock();
        writeln!(out, "{}", Self::format_line(event))?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use uuid::Uuid;

    /// Cloneable in-memory sink so the test can read what was written
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_summary_line() {
        let buffer = SharedBuffer::default();
        let observer = ConsoleOrderObserver::with_writer(buffer.clone());
        let order_id = Uuid::new_v4();

        let event = OrderPlaced {
            order_id,
            at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap(),
            description: "espresso, milk".to_string(),
            subtotal: Decimal::new(29, 1),
            total: Decimal::new(232, 2),
        };
        observer.on_order_placed(&event).unwrap();

        let written = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert_eq!(
            written,
            format!("[09:05:07] Order {} subtotal $2.90 total $2.32\n", order_id)
        );
    }
}
