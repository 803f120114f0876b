//! # Validation Module
//!
//! Input validation utilities for the sales register.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell (text menu / desktop form)                             │
//! │  ├── parse_* : shape of the raw text (blank, numeric, integer)         │
//! │  └── Re-prompt or warn the operator                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Sale Store (ventas-db)                                       │
//! │  ├── NewSale::new → validate_* on typed values                         │
//! │  └── Rejects before any write                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ventas_core::validation::{parse_quantity, parse_unit_price};
//!
//! assert_eq!(parse_unit_price(" 2.50 ").unwrap(), 2.5);
//! assert_eq!(parse_quantity("4").unwrap(), 4);
//! assert!(parse_quantity("4.0").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name and returns it trimmed.
///
/// ## Rules
/// - Surrounding whitespace is removed
/// - Must not be empty afterwards
/// - Case is preserved
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "product".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Normalizes a search term: trimmed and lowercased (may be empty).
///
/// Lowercasing is Unicode-aware, so `"CAFÉ"` and `"café"` normalize alike.
pub fn normalize_search_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// True when a stored product name equals an already normalized search
/// term, ignoring case.
pub fn product_matches(product: &str, normalized_term: &str) -> bool {
    product.trim().to_lowercase() == normalized_term
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a unit price from operator text.
///
/// ## Rules
/// - Blank input is `Required`
/// - Must parse as a real number (`.` decimal separator)
/// - Must be finite and non-negative
pub fn parse_unit_price(raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let price: f64 = raw.parse().map_err(|_| ValidationError::InvalidNumber {
        field: "price".to_string(),
        value: raw.to_string(),
    })?;

    validate_unit_price(price)?;
    Ok(price)
}

/// Parses a quantity from operator text.
///
/// ## Rules
/// - Blank input is `Required`
/// - Must be a whole number (`"3.0"` is rejected)
/// - Must be non-negative
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let quantity: i64 = raw.parse().map_err(|_| ValidationError::NotAnInteger {
        field: "quantity".to_string(),
        value: raw.to_string(),
    })?;

    validate_quantity(quantity)?;
    Ok(quantity)
}

/// Parses a sale id typed by the operator.
pub fn parse_sale_id(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    raw.parse().map_err(|_| ValidationError::NotAnInteger {
        field: "id".to_string(),
        value: raw.to_string(),
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a typed unit price.
///
/// Zero is allowed (free items).
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a typed quantity. Zero is allowed.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::types::NewSale;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn non_negative_price_text_parses_exactly(price in 0.0f64..1.0e9, pad in " {0,3}") {
            let raw = format!("{pad}{price}{pad}");
            prop_assert_eq!(parse_unit_price(&raw), Ok(price));
        }

        #[test]
        fn non_negative_quantity_text_parses_exactly(quantity in 0i64..i64::MAX) {
            prop_assert_eq!(parse_quantity(&quantity.to_string()), Ok(quantity));
        }

        #[test]
        fn negative_values_are_rejected(price in -1.0e9f64..-1.0e-9, quantity in i64::MIN..0) {
            prop_assert!(
                matches!(parse_unit_price(&price.to_string()), Err(ValidationError::Negative { .. })),
                "accepted price {}",
                price
            );
            prop_assert!(
                matches!(parse_quantity(&quantity.to_string()), Err(ValidationError::Negative { .. })),
                "accepted quantity {}",
                quantity
            );
        }

        #[test]
        fn alphabetic_price_is_rejected(raw in "[A-Za-z]{1,10}") {
            prop_assert!(NewSale::parse("Milk", &raw, "1").is_err());
        }

        #[test]
        fn fractional_quantity_is_rejected(whole in 0u32..10_000, frac in 1u32..100) {
            let raw = format!("{whole}.{frac}");
            let rejected = matches!(
                NewSale::parse("Milk", "1.00", &raw),
                Err(ValidationError::NotAnInteger { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn blank_product_is_rejected(blank in "[ \t]{0,8}") {
            let rejected = matches!(
                validate_product_name(&blank),
                Err(ValidationError::Required { .. })
            );
            prop_assert!(rejected);
        }
    }
}
