//! # Repository Module
//!
//! Database repository implementations for the sales register.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Shell (text menu / desktop form)                                      │
//! │       │                                                                 │
//! │       │  db.sales().find_by_product("bread")                           │
//! │       ▼                                                                 │
//! │  SaleRepository                     ReportRepository                   │
//! │  ├── register(...)                  └── summarize()                    │
//! │  ├── list_all()                           │                            │
//! │  ├── find_by_product(name)                │ list_all + report::summarize│
//! │  ├── delete(id)                           │                            │
//! │  └── delete_all()                         │                            │
//! │       │                                   │                            │
//! │       ▼  SQL                              ▼                            │
//! │  SQLite `ventas` table                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SaleRepository`](sale::SaleRepository) - Sale Store CRUD
//! - [`ReportRepository`](report::ReportRepository) - Statistics over all sales

pub mod report;
pub mod sale;
