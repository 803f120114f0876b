//! # Rendering
//!
//! Plain-text formatting of records and statistics. Amounts are rounded to
//! two decimals for display only.

use ventas_core::{SaleRecord, SalesSummary};

/// One line per sale.
pub fn sale_line(record: &SaleRecord) -> String {
    format!(
        "ID {} | Product: {}, Price: {:.2}, Quantity: {}",
        record.id, record.product, record.unit_price, record.quantity
    )
}

/// Statistics block, one line per figure.
pub fn summary_lines(summary: &SalesSummary) -> [String; 3] {
    [
        format!("Total sales: {:.2}", summary.total_revenue),
        format!("Best-selling product: {}", summary.top_product),
        format!("Average price: {:.2}", summary.average_unit_price),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_line() {
        let record = SaleRecord::new(3, "Bread", 2.5, 4);
        assert_eq!(
            sale_line(&record),
            "ID 3 | Product: Bread, Price: 2.50, Quantity: 4"
        );
    }

    #[test]
    fn test_summary_lines_round_for_display() {
        let summary = SalesSummary {
            record_count: 3,
            total_revenue: 24.5,
            top_product: "Milk".to_string(),
            average_unit_price: 6.2 / 3.0,
        };

        assert_eq!(
            summary_lines(&summary),
            [
                "Total sales: 24.50".to_string(),
                "Best-selling product: Milk".to_string(),
                "Average price: 2.07".to_string(),
            ]
        );
    }
}
