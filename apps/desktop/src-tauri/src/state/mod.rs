//! # State Module
//!
//! Application state managed by the desktop runtime.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  app.manage(db_state);                                                  │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  ┌──────────────────────┐                                               │
//! │  │   DbState            │  Database (SQLite pool, one writer)           │
//! │  └──────────────────────┘  internally synchronized                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod db;

pub use db::DbState;
