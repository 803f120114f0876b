//! # Ventas Desktop Library
//!
//! Backend of the desktop sales form.
//!
//! ## Module Organization
//! ```text
//! ventas_desktop_lib/
//! ├── lib.rs          ◄─── You are here (window setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── db.rs       ◄─── Database state wrapper
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── sale.rs     ◄─── Register/list/delete/statistics handlers
//! │   └── ipc.rs      ◄─── #[tauri::command] wrappers
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! The window itself lives behind the `tauri` feature. Without it the crate
//! still builds the command handlers, which is what the tests exercise.

pub mod commands;
pub mod error;
pub mod state;

#[cfg(feature = "tauri")]
pub use app::run;

#[cfg(feature = "tauri")]
mod app {
    use tauri::Manager;
    use tracing::{error, info};
    use tracing_subscriber::EnvFilter;

    use crate::commands;
    use crate::state::DbState;
    use ventas_db::{Database, DbConfig};

    /// Runs the desktop application.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Initialize logging (RUST_LOG overrides the default filter)          │
    /// │  2. Open the database at VENTAS_DB_PATH (default ventas.db)             │
    /// │     • SQLite with WAL mode                                              │
    /// │     • Run pending migrations                                            │
    /// │  3. Manage DbState                                                      │
    /// │  4. Register commands and launch the window                             │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn run() {
        init_tracing();

        info!("Starting Ventas desktop application");

        let result = tauri::Builder::default()
            .setup(|app| {
                let config = DbConfig::from_env();
                info!(path = %config.database_path.display(), "Database path determined");

                let db = tauri::async_runtime::block_on(Database::new(config))?;
                info!("Database connected and migrations applied");

                app.manage(DbState::new(db));

                info!("State initialized");
                Ok(())
            })
            .invoke_handler(tauri::generate_handler![
                commands::ipc::list_sales,
                commands::ipc::register_sale,
                commands::ipc::delete_sale,
                commands::ipc::show_statistics,
            ])
            .run(tauri::generate_context!());

        if let Err(e) = result {
            error!("Desktop application failed: {}", e);
            std::process::exit(1);
        }
    }

    /// Initializes the tracing subscriber for structured logging.
    ///
    /// ## Log Levels
    /// - `RUST_LOG=debug` - Show debug messages
    /// - `RUST_LOG=ventas=trace` - Show trace for ventas crates only
    /// - Default: INFO, debug for ventas crates
    fn init_tracing() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,ventas=debug,sqlx=warn"));

        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
