//! # Database Pool Management
//!
//! Connection pool creation and configuration for SQLite.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Handle Lifetime                           │
//! │                                                                         │
//! │  Shell startup                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::from_env() ← VENTAS_DB_PATH or ./ventas.db                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Open pool + bootstrap schema            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shell owns the Database and hands out repositories                    │
//! │  db.sales()   → SaleRepository                                         │
//! │  db.reports() → ReportRepository                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.close().await ← Shell shutdown                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is exactly one operator and one writer, so the pool is small and
//! no locking is layered on top of SQLite's own.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::report::ReportRepository;
use crate::repository::sale::SaleRepository;

/// Environment variable overriding the database file location.
pub const DB_PATH_ENV: &str = "VENTAS_DB_PATH";

/// Database file used when no override is set, relative to the working
/// directory. Both shells share it.
pub const DEFAULT_DB_FILE: &str = "ventas.db";

const IN_MEMORY: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/ventas.db")
///     .max_connections(2)
///     .min_connections(1);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 2 (one operator, one writer)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection. `None` keeps connections
    /// open for the life of the pool.
    /// Default: 10 minutes
    pub idle_timeout: Option<Duration>,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a configuration for the given file, created if missing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 2,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            run_migrations: true,
        }
    }

    /// Resolves the database path from the environment.
    ///
    /// `VENTAS_DB_PATH` wins when set and non-blank, otherwise `./ventas.db`.
    pub fn from_env() -> Self {
        DbConfig::from_path_var(std::env::var(DB_PATH_ENV).ok())
    }

    fn from_path_var(value: Option<String>) -> Self {
        let path = value
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_FILE.to_string());

        DbConfig::new(path)
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Each `Database` opened from this config is isolated.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY),
            max_connections: 1, // In-memory requires single connection
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: None, // Dropping the connection drops the data
            run_migrations: true,
        }
    }

    /// True when this config points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == IN_MEMORY
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        if self.is_in_memory() {
            return SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()));
        }

        let options = SqliteConnectOptions::new()
            .filename(&self.database_path)
            // WAL mode: readers don't block the writer
            .journal_mode(SqliteJournalMode::Wal)
            // NORMAL synchronous: safe from corruption, may lose the last
            // transaction on power loss
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        Ok(options)
    }
}

// =============================================================================
// Database
// =============================================================================

/// Owned database handle providing repository access.
///
/// Constructed once at shell startup and released with [`Database::close`].
/// Cloning shares the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl Database {
    /// Opens the database described by `config`.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite (WAL, NORMAL synchronous)
    /// 3. Creates the connection pool
    /// 4. Runs migrations (if enabled)
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let connect_options = config.connect_options()?;

        debug!("Connection options configured");

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout);

        if config.is_in_memory() {
            pool_options = pool_options.max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        let db = Database { pool };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Runs database migrations. Idempotent.
    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// Returns a reference to the connection pool.
    ///
    /// Prefer repository methods when available.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the sale repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let id = db.sales().register("Bread", 2.50, 4).await?;
    /// ```
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.pool.clone())
    }

    /// Returns the report repository.
    pub fn reports(&self) -> ReportRepository {
        ReportRepository::new(self.pool.clone())
    }

    /// Closes the connection pool.
    ///
    /// After calling close, all repository operations fail with
    /// `DbError::ConnectionFailed`.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks whether the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database() {
        let config = DbConfig::in_memory();
        let db = Database::new(config).await.unwrap();

        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_in_memory_databases_are_isolated() {
        let first = Database::new(DbConfig::in_memory()).await.unwrap();
        let second = Database::new(DbConfig::in_memory()).await.unwrap();

        first.sales().register("Bread", 2.5, 4).await.unwrap();

        assert_eq!(first.sales().count().await.unwrap(), 1);
        assert_eq!(second.sales().count().await.unwrap(), 0);
    }

    #[test]
    fn test_config_defaults() {
        let config = DbConfig::new("/tmp/test.db");
        assert_eq!(config.max_connections, 2);
        assert!(config.run_migrations);
        assert!(!config.is_in_memory());

        let memory = DbConfig::in_memory();
        assert_eq!(memory.max_connections, 1);
        assert!(memory.idle_timeout.is_none());
        assert!(memory.is_in_memory());
    }

    #[test]
    fn test_db_path_variable_falls_back_to_default_file() {
        let unset = DbConfig::from_path_var(None);
        assert_eq!(unset.database_path, PathBuf::from(DEFAULT_DB_FILE));

        let blank = DbConfig::from_path_var(Some("  ".to_string()));
        assert_eq!(blank.database_path, PathBuf::from(DEFAULT_DB_FILE));

        let custom = DbConfig::from_path_var(Some("/var/lib/ventas/tienda.db".to_string()));
        assert_eq!(custom.database_path, PathBuf::from("/var/lib/ventas/tienda.db"));
    }

    #[tokio::test]
    async fn test_open_without_migrations_leaves_schema_absent() {
        let config = DbConfig {
            run_migrations: false,
            ..DbConfig::in_memory()
        };
        let db = Database::new(config).await.unwrap();

        assert!(db.health_check().await);
        assert!(db.sales().count().await.is_err());

        db.run_migrations().await.unwrap();
        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_closed_database_reports_storage_failure() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
        let err = db.sales().list_all().await.unwrap_err();
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn test_file_database_is_durable_and_never_reuses_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ventas.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let first = db.sales().register("Bread", 2.5, 4).await.unwrap();
        let second = db.sales().register("Milk", 1.2, 10).await.unwrap();
        assert!(db.sales().delete(second).await.unwrap());
        db.close().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let records = db.sales().list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, first);
        assert_eq!(records[0].product, "Bread");

        let third = db.sales().register("Eggs", 0.3, 12).await.unwrap();
        assert!(third > second);
        db.close().await;
    }
}
