use anyhow::Result;

use crate::domain::beverage::menu_price;
use crate::domain::order::Receipt;

const DIVIDER_WIDTH: usize = 40;

// ============================================================================
// Receipt Rendering
// ============================================================================

/// Fixed text layout printed at the end of an order.
///
/// Item prices come from the menu: base cost for the drink, increment for
/// each add-on. Labels that are not on the menu are listed without a price.
pub fn render_receipt(receipt: &Receipt) -> String {
    let divider = "-".repeat(DIVIDER_WIDTH);

    let items = if receipt.items.is_empty() {
        "  (No items)\n".to_string()
    } else {
        receipt.items.iter().map(|item| item_line(item)).collect()
    };

    format!(
        "Order {id} @ {at}\n\
         {divider}\n\
         Items:\n\
         {items}\
         {divider}\n\
         Subtotal: ${subtotal:.2}\n\
         Pricing Policy: {pricing}\n\
         Total: ${total:.2}\n\
         {divider}\n",
        id = receipt.order_id,
        at = receipt.at.format("%Y-%m-%d %H:%M:%S"),
        subtotal = receipt.subtotal,
        pricing = receipt.pricing,
        total = receipt.total,
    )
}

fn item_line(item: &str) -> String {
    match menu_price(item) {
        Some(price) => format!("  • {} — ${:.2}\n", item, price),
        None => format!("  • {}\n", item),
    }
}

pub fn render_receipt_json(receipt: &Receipt) -> Result<String> {
    Ok(serde_json::to_string_pretty(receipt)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn sample_receipt() -> Receipt {
        let mut receipt = Receipt::new();
        receipt.at = Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap();
        receipt.items = vec!["espresso".into(), "milk".into(), "extrashot".into()];
        receipt.subtotal = Decimal::new(370, 2);
        receipt.pricing = "Happy Hour (-20%)".to_string();
        receipt.total = Decimal::new(296, 2);
        receipt
    }

    #[test]
    fn test_text_layout() {
        let receipt = sample_receipt();
        let text = render_receipt(&receipt);
        let divider = "-".repeat(40);

        let expected = format!(
            "Order {} @ 2024-05-17 14:30:00\n\
             {divider}\n\
             Items:\n  \
             • espresso — $2.50\n  \
             • milk — $0.40\n  \
             • extrashot — $0.80\n\
             {divider}\n\
             Subtotal: $3.70\n\
             Pricing Policy: Happy Hour (-20%)\n\
             Total: $2.96\n\
             {divider}\n",
            receipt.order_id
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_receipt() {
        let text = render_receipt(&Receipt::new());
        assert!(text.contains("Items:\n  (No items)\n"));
        assert!(text.contains("Subtotal: $0.00"));
        assert!(text.contains("Total: $0.00"));
    }

    #[test]
    fn test_off_menu_label_has_no_price() {
        let mut receipt = Receipt::new();
        receipt.items = vec!["Espresso Romano".into()];
        let text = render_receipt(&receipt);
        assert!(text.contains("  • Espresso Romano\n"));
    }

    #[test]
    fn test_json_rendering() {
        let receipt = sample_receipt();
        let json = render_receipt_json(&receipt).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["items"][1], "milk");
        assert_eq!(value["pricing"], "Happy Hour (-20%)");
        assert_eq!(value["total"], "2.96");
    }
}
