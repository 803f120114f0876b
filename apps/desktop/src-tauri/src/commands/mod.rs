//! # Desktop Commands Module
//!
//! Everything the form can ask of the backend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── sale.rs     ◄─── Register, list, delete, statistics
//! └── ipc.rs      ◄─── #[tauri::command] wrappers (feature "tauri")
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form (dist/index.html)                                                 │
//! │  const sales = await invoke('list_sales');                              │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  ipc::list_sales(db: State<'_, DbState>)                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  sale::list_sales(&Database) -> Result<Vec<SaleRecord>, ApiError>       │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Form receives: SaleRecord[] or { code, message }                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The handlers in `sale` take plain references so they run without a
//! window.

#[cfg(feature = "tauri")]
pub mod ipc;
pub mod sale;
