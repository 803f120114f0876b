//! # Ventas Desktop Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WebView: dist/index.html                                               │
//! │    product / price / quantity fields                                    │
//! │    Register · Delete selected · Show statistics · Refresh list          │
//! │    table: ID | Product | Price | Quantity                               │
//! │                     invoke('command')                                   │
//! │                            │                                            │
//! │                            ▼                                            │
//! │  ventas_desktop_lib: commands/ + state/                                 │
//! │                            │                                            │
//! │                            ▼                                            │
//! │  SQLite: ventas.db (WAL mode)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    ventas_desktop_lib::run();
}
