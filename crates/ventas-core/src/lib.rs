//! # ventas-core: Pure Business Logic for the Sales Register
//!
//! This crate holds the domain of the register: the sale record, the rules a
//! record must satisfy, and the statistics derived from the recorded sales.
//! Nothing in here touches the database, the terminal or a window.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ventas Architecture                              │
//! │                                                                         │
//! │  ┌───────────────────────────┐    ┌───────────────────────────────┐    │
//! │  │   Text Menu (apps/cli)    │    │  Desktop Form (apps/desktop)  │    │
//! │  └─────────────┬─────────────┘    └───────────────┬───────────────┘    │
//! │                │  parse raw input                 │                     │
//! │  ┌─────────────▼──────────────────────────────────▼───────────────┐    │
//! │  │               ★ ventas-core (THIS CRATE) ★                      │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐      ┌─────────────┐      ┌───────────┐        │    │
//! │  │   │   types   │      │ validation  │      │  report   │        │    │
//! │  │   │SaleRecord │      │ parse/check │      │ summarize │        │    │
//! │  │   │ NewSale   │      │             │      │           │        │    │
//! │  │   └───────────┘      └─────────────┘      └───────────┘        │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │                │                                                        │
//! │  ┌─────────────▼───────────────────────────────────────────────────┐   │
//! │  │                 ventas-db (Sale Store)                          │   │
//! │  │            SQLite queries, migrations, repositories             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (SaleRecord, NewSale)
//! - [`validation`] - Parsing of operator input and invariant checks
//! - [`report`] - Aggregate statistics over a set of sales
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use ventas_core::{report, NewSale, SaleRecord};
//!
//! let sale = NewSale::parse("  Bread ", "2.50", "4").unwrap();
//! assert_eq!(sale.product(), "Bread");
//!
//! let records = vec![SaleRecord::new(1, "Bread", 2.5, 4)];
//! let summary = report::summarize(&records).unwrap();
//! assert_eq!(summary.top_product, "Bread");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use report::SalesSummary;
pub use types::{NewSale, SaleRecord};
