//! # Reporting
//!
//! Aggregate statistics over the full set of recorded sales.
//!
//! Statistics are always recomputed from the records handed in; nothing is
//! cached or stored.
//!
//! ## Top Product
//! `top_product` is the product of the single record with the largest
//! `quantity`. Records of the same product are NOT summed first, and on a tie
//! the record that comes first (lowest id) wins.

use serde::{Deserialize, Serialize};

use crate::types::SaleRecord;

/// Statistics over a non-empty set of sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Number of records the summary was computed from.
    pub record_count: usize,

    /// Sum of `unit_price × quantity` over every record.
    pub total_revenue: f64,

    /// Product of the record with the largest quantity.
    pub top_product: String,

    /// Arithmetic mean of `unit_price` (not revenue weighted).
    pub average_unit_price: f64,
}

/// Summarizes `records`, given in ascending id order.
///
/// Returns `None` when there are no records, so callers never see a
/// division by zero or an undefined top product.
///
/// ## Example
/// ```rust
/// use ventas_core::{report::summarize, SaleRecord};
///
/// assert!(summarize(&[]).is_none());
///
/// let records = [
///     SaleRecord::new(1, "Bread", 2.50, 4),
///     SaleRecord::new(2, "Milk", 1.20, 10),
/// ];
/// let summary = summarize(&records).unwrap();
/// assert_eq!(summary.top_product, "Milk");
/// ```
pub fn summarize(records: &[SaleRecord]) -> Option<SalesSummary> {
    let first = records.first()?;

    let mut top = first;
    let mut total_revenue = 0.0;
    let mut price_sum = 0.0;

    for record in records {
        total_revenue += record.revenue();
        price_sum += record.unit_price;

        // Strictly greater keeps the earliest record on ties.
        if record.quantity > top.quantity {
            top = record;
        }
    }

    Some(SalesSummary {
        record_count: records.len(),
        total_revenue,
        top_product: top.product.clone(),
        average_unit_price: price_sum / records.len() as f64,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
