//! # Table Rendering
//!
//! Fixed-width text tables for the catalog, card lists, and purchase
//! history. Pure string builders; the flows decide when to print them and
//! when to print an "empty" message instead.

use emporia_core::{CreditCard, Product, PurchaseAudit, PurchaseLine};

/// Date format for a customer's own history.
const CUSTOMER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Staff history shows the day only.
const STAFF_DATE_FORMAT: &str = "%Y-%m-%d";

/// Catalog table: id, name, category, price, quantity on hand.
pub fn product_table(products: &[Product]) -> String {
    let rule = "-".repeat(75);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<5} {:<25} {:<15} {:<10} {:<5}\n",
        "ID", "Name", "Category", "Price", "Qty"
    ));
    out.push_str(&rule);
    out.push('\n');

    for product in products {
        out.push_str(&format!(
            "{:<5} {:<25} {:<15} {:<10} {:<5}\n",
            product.id,
            product.name,
            product.category,
            product.price.to_string(),
            product.quantity
        ));
    }

    out.push_str(&rule);
    out
}

/// Stored cards, listed 1-indexed; the same numbering the purchase flow
/// asks the customer to pick from.
pub fn card_list(cards: &[CreditCard]) -> String {
    let mut out = String::new();
    for (index, card) in cards.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} (expires {})\n",
            index + 1,
            card.number,
            card.expiration
        ));
    }
    // Drop the trailing newline; callers print line-wise.
    out.pop();
    out
}

/// A customer's own purchase history.
pub fn customer_history_table(lines: &[PurchaseLine]) -> String {
    let rule = "-".repeat(80);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<12} {:<20} {:<10} {:<25} {:<5} {:<12} {:<12}\n",
        "Purchase ID", "Date", "Product ID", "Product Name", "Qty", "Unit Price", "Total Price"
    ));
    out.push_str(&rule);
    out.push('\n');

    for line in lines {
        out.push_str(&format!(
            "{:<12} {:<20} {:<10} {:<25} {:<5} {:<12} {:<12}\n",
            line.purchase_id,
            line.purchased_at.format(CUSTOMER_DATE_FORMAT).to_string(),
            line.product_id,
            line.product_name,
            line.quantity,
            line.unit_price.to_string(),
            line.total_price.to_string()
        ));
    }

    out.push_str(&rule);
    out
}

/// The store-wide history staff see, with the purchasing customer's
/// identity on every row.
pub fn staff_history_table(rows: &[PurchaseAudit]) -> String {
    let rule = "-".repeat(120);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<12} {:<12} {:<12} {:<15} {:<15} {:<12} {:<25} {:<5} {:<10} {:<12}\n",
        "Purchase ID",
        "Date",
        "Customer ID",
        "First Name",
        "Last Name",
        "Product ID",
        "Product Name",
        "Qty",
        "Unit Price",
        "Total Price"
    ));
    out.push_str(&rule);
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:<12} {:<12} {:<12} {:<15} {:<15} {:<12} {:<25} {:<5} {:<10} {:<12}\n",
            row.purchase_id,
            row.purchased_at.format(STAFF_DATE_FORMAT).to_string(),
            row.customer_id,
            row.first_name,
            row.last_name,
            row.product_id,
            row.product_name,
            row.quantity,
            row.unit_price.to_string(),
            row.total_price.to_string()
        ));
    }

    out.push_str(&rule);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use emporia_core::Money;

    fn product() -> Product {
        Product {
            id: 7,
            name: "Espresso Beans 1kg".to_string(),
            category: "Pantry".to_string(),
            price: Money::from_cents(1999),
            quantity: 3,
        }
    }

    #[test]
    fn test_product_table_formats_money_and_columns() {
        let table = product_table(&[product()]);

        assert!(table.contains("ID"));
        assert!(table.contains("Espresso Beans 1kg"));
        assert!(table.contains("$19.99"));
        assert!(table.starts_with(&"-".repeat(75)));
    }

    #[test]
    fn test_card_list_is_one_indexed() {
        let cards = vec![
            CreditCard {
                number: "4111111111111111".to_string(),
                expiration: NaiveDate::from_ymd_opt(2027, 4, 30).unwrap(),
            },
            CreditCard {
                number: "5500005555555559".to_string(),
                expiration: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            },
        ];

        let listing = card_list(&cards);
        assert!(listing.contains("1. 4111111111111111 (expires 2027-04-30)"));
        assert!(listing.contains("2. 5500005555555559 (expires 2026-12-31)"));
    }

    #[test]
    fn test_customer_history_date_has_minutes() {
        let line = PurchaseLine {
            purchase_id: 1,
            purchased_at: Utc.with_ymd_and_hms(2026, 8, 6, 14, 30, 59).unwrap(),
            product_id: 7,
            product_name: "Espresso Beans 1kg".to_string(),
            quantity: 2,
            unit_price: Money::from_cents(1999),
            total_price: Money::from_cents(3998),
        };

        let table = customer_history_table(&[line]);
        assert!(table.contains("2026-08-06 14:30"));
        assert!(table.contains("$39.98"));
    }

    #[test]
    fn test_staff_history_date_is_day_only() {
        let row = PurchaseAudit {
            purchase_id: 1,
            purchased_at: Utc.with_ymd_and_hms(2026, 8, 6, 14, 30, 59).unwrap(),
            customer_id: 9,
            first_name: "Dana".to_string(),
            last_name: "Whitfield".to_string(),
            product_id: 7,
            product_name: "Espresso Beans 1kg".to_string(),
            quantity: 2,
            unit_price: Money::from_cents(1999),
            total_price: Money::from_cents(3998),
        };

        let table = staff_history_table(&[row]);
        assert!(table.contains("2026-08-06"));
        assert!(!table.contains("2026-08-06 14:30"));
        assert!(table.contains("Whitfield"));
    }
}
