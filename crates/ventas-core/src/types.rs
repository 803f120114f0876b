//! # Domain Types
//!
//! The register has exactly one entity: a recorded sale.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   register()    ┌─────────────────┐               │
//! │  │    NewSale      │ ──────────────► │   SaleRecord    │               │
//! │  │  ─────────────  │                 │  ─────────────  │               │
//! │  │  product        │                 │  id (store)     │               │
//! │  │  unit_price     │                 │  product        │               │
//! │  │  quantity       │                 │  unit_price     │               │
//! │  │  (validated)    │                 │  quantity       │               │
//! │  └─────────────────┘                 └─────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `NewSale` can only be built through its validating constructors, so the
//! store never persists a partial or invalid record. Records are immutable
//! once stored: there is no update operation.

use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationResult};

// =============================================================================
// Sale Record
// =============================================================================

/// A sale as persisted by the store.
///
/// `id` is assigned by the store, increases monotonically and is never reused
/// after deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleRecord {
    /// Store-assigned identifier.
    pub id: i64,

    /// Product name, case preserved as entered (trimmed).
    pub product: String,

    /// Price of one unit. Never negative.
    pub unit_price: f64,

    /// Units sold. Never negative.
    pub quantity: i64,
}

impl SaleRecord {
    /// Builds a record from its parts.
    pub fn new(id: i64, product: impl Into<String>, unit_price: f64, quantity: i64) -> Self {
        SaleRecord {
            id,
            product: product.into(),
            unit_price,
            quantity,
        }
    }

    /// Revenue of this single sale (`unit_price × quantity`).
    #[inline]
    pub fn revenue(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

// =============================================================================
// New Sale
// =============================================================================

/// A validated sale that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    product: String,
    unit_price: f64,
    quantity: i64,
}

impl NewSale {
    /// Checks the record invariants on already typed values.
    ///
    /// The product name is trimmed; an empty result is rejected, as are
    /// negative or non-finite prices and negative quantities.
    pub fn new(product: &str, unit_price: f64, quantity: i64) -> ValidationResult<Self> {
        let product = validation::validate_product_name(product)?;
        validation::validate_unit_price(unit_price)?;
        validation::validate_quantity(quantity)?;

        Ok(NewSale {
            product,
            unit_price,
            quantity,
        })
    }

    /// Parses raw operator text for all three fields.
    ///
    /// ## Example
    /// ```rust
    /// use ventas_core::NewSale;
    ///
    /// assert!(NewSale::parse("Milk", "1.20", "10").is_ok());
    /// assert!(NewSale::parse("Milk", "cheap", "10").is_err());
    /// assert!(NewSale::parse("   ", "1.20", "10").is_err());
    /// ```
    pub fn parse(product: &str, unit_price: &str, quantity: &str) -> ValidationResult<Self> {
        let product = validation::validate_product_name(product)?;
        let unit_price = validation::parse_unit_price(unit_price)?;
        let quantity = validation::parse_quantity(quantity)?;
        NewSale::new(&product, unit_price, quantity)
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_new_sale_trims_product() {
        let sale = NewSale::new("  Bread  ", 2.5, 4).unwrap();
        assert_eq!(sale.product(), "Bread");
        assert_eq!(sale.unit_price(), 2.5);
        assert_eq!(sale.quantity(), 4);
    }

    #[test]
    fn test_new_sale_rejects_invariant_violations() {
        assert!(matches!(
            NewSale::new(" \t ", 1.0, 1),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            NewSale::new("Milk", -0.5, 1),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            NewSale::new("Milk", f64::NAN, 1),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            NewSale::new("Milk", 1.0, -3),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_zero_price_and_quantity_allowed() {
        let sale = NewSale::new("Sample", 0.0, 0).unwrap();
        assert_eq!(sale.product(), "Sample");
        assert_eq!(sale.unit_price(), 0.0);
        assert_eq!(sale.quantity(), 0);
    }

    #[test]
    fn test_parse_reports_first_bad_field() {
        let err = NewSale::parse("Milk", "1,20", "x").unwrap_err();
        assert_eq!(err.field(), "price");

        let err = NewSale::parse("Milk", "1.20", "2.5").unwrap_err();
        assert_eq!(err.field(), "quantity");
    }

    #[test]
    fn test_revenue() {
        let record = SaleRecord::new(1, "Bread", 2.5, 4);
        assert!((record.revenue() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_serializes_with_field_names() {
        let record = SaleRecord::new(3, "Milk", 1.2, 10);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["product"], "Milk");
        assert_eq!(json["quantity"], 10);
    }
}
