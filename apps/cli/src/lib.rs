//! # ventas-cli: Text Menu Shell
//!
//! Numbered terminal menu over the Sale Store.
//!
//! ## Module Organization
//! ```text
//! ventas_cli/
//! ├── lib.rs       ◄─── You are here
//! ├── shell.rs     ◄─── Menu loop and actions
//! ├── menu.rs      ◄─── The seven choices
//! ├── render.rs    ◄─── Record/statistics formatting
//! └── error.rs     ◄─── Fatal shell errors
//! ```
//!
//! The binary (`ventas`) opens the database once, runs the shell over
//! stdin/stdout and closes the database on the way out.

pub mod error;
pub mod menu;
pub mod render;
pub mod shell;

pub use error::{ShellError, ShellResult};
pub use shell::TextShell;
