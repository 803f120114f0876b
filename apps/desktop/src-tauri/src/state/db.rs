//! # Database State
//!
//! Wraps the `Database` handle for use in desktop commands.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! #[tauri::command]
//! async fn list_sales(db: State<'_, DbState>) -> Result<Vec<SaleRecord>, ApiError> {
//!     sale::list_sales(db.inner()).await
//! }
//! ```

use ventas_db::Database;

/// Database handle held for the lifetime of the window.
#[derive(Debug)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
