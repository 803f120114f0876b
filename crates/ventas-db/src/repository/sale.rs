//! # Sale Repository
//!
//! Durable CRUD over the `ventas` table.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. REGISTER                                                           │
//! │     └── register() → NewSale::new (invariants) → INSERT → id           │
//! │                                                                         │
//! │  2. READ                                                               │
//! │     └── list_all() / find_by_product() / get_by_id()                   │
//! │                                                                         │
//! │  3. DESTROY (irreversible)                                             │
//! │     ├── delete(id)   → true if a row was removed                       │
//! │     └── delete_all() → number of rows removed                          │
//! │                                                                         │
//! │  There is no update: a record is immutable once stored.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method is a single statement; no transaction spans more than one.

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;
use ventas_core::validation::{normalize_search_term, product_matches};
use ventas_core::{NewSale, SaleRecord};

/// Column list mapping the stored names onto `SaleRecord` fields.
const SELECT_SALE: &str = r#"
    SELECT
        id,
        producto AS product,
        precio AS unit_price,
        cantidad AS quantity
    FROM ventas
"#;

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a sale and returns its assigned id.
    ///
    /// The invariants are checked here regardless of what the shell already
    /// validated: a blank product, a negative or non-finite price, or a
    /// negative quantity fails with `DbError::Validation` and writes nothing.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let id = db.sales().register("Bread", 2.50, 4).await?;
    /// ```
    pub async fn register(&self, product: &str, unit_price: f64, quantity: i64) -> DbResult<i64> {
        let sale = NewSale::new(product, unit_price, quantity).map_err(|e| {
            warn!(error = %e, "Rejected sale");
            e
        })?;

        self.insert(&sale).await
    }

    /// Inserts an already validated sale and returns its assigned id.
    pub async fn insert(&self, sale: &NewSale) -> DbResult<i64> {
        let result = sqlx::query(
            "INSERT INTO ventas (producto, precio, cantidad) VALUES (?1, ?2, ?3)",
        )
        .bind(sale.product())
        .bind(sale.unit_price())
        .bind(sale.quantity())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        debug!(
            id,
            product = %sale.product(),
            unit_price = sale.unit_price(),
            quantity = sale.quantity(),
            "Registered sale"
        );

        Ok(id)
    }

    /// Returns every sale in ascending id (insertion) order.
    ///
    /// An empty table yields an empty vector.
    pub async fn list_all(&self) -> DbResult<Vec<SaleRecord>> {
        let sql = format!("{SELECT_SALE} ORDER BY id");

        let sales: Vec<SaleRecord> = sqlx::query_as::<_, SaleRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = sales.len(), "Listed sales");
        Ok(sales)
    }

    /// Returns the sales whose product equals `name`, ignoring case.
    ///
    /// Exact match after trimming `name`; no prefix or substring matching.
    /// Case is folded in Rust with full Unicode lowercasing (SQLite's
    /// `LOWER()` folds ASCII only).
    pub async fn find_by_product(&self, name: &str) -> DbResult<Vec<SaleRecord>> {
        let term = normalize_search_term(name);
        let sql = format!("{SELECT_SALE} ORDER BY id");

        let sales: Vec<SaleRecord> = sqlx::query_as::<_, SaleRecord>(&sql)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .filter(|sale| product_matches(&sale.product, &term))
            .collect();

        debug!(product = %term, count = sales.len(), "Searched sales by product");
        Ok(sales)
    }

    /// Gets a sale by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<SaleRecord>> {
        let sql = format!("{SELECT_SALE} WHERE id = ?1");

        let sale: Option<SaleRecord> = sqlx::query_as::<_, SaleRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sale)
    }

    /// Removes the sale with `id`.
    ///
    /// Returns whether a record was actually removed; an unknown id is a
    /// no-op, not an error.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM ventas WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected() > 0;

        debug!(id, removed, "Deleted sale");
        Ok(removed)
    }

    /// Removes every sale. Irreversible; asking for confirmation is the
    /// caller's job.
    ///
    /// Returns the number of records removed.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM ventas")
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected();

        debug!(removed, "Deleted all sales");
        Ok(removed)
    }

    /// Counts stored sales.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ventas")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use ventas_core::{NewSale, SaleRecord, ValidationError};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seed_bakery(db: &Database) -> Vec<i64> {
        let sales = db.sales();
        vec![
            sales.register("Bread", 2.50, 4).await.unwrap(),
            sales.register("Milk", 1.20, 10).await.unwrap(),
            sales.register("Bread", 2.50, 1).await.unwrap(),
        ]
    }

    #[tokio::test]
    async fn test_register_then_list_returns_exact_values() {
        let db = test_db().await;

        let id = db.sales().register("Bread", 2.50, 4).await.unwrap();

        let records = db.sales().list_all().await.unwrap();
        assert_eq!(records, vec![SaleRecord::new(id, "Bread", 2.50, 4)]);
    }

    #[tokio::test]
    async fn test_register_trims_and_preserves_case() {
        let db = test_db().await;

        let id = db.sales().register("  Pan Dulce ", 3.0, 2).await.unwrap();

        let record = db.sales().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(record.product, "Pan Dulce");
    }

    #[tokio::test]
    async fn test_list_all_in_insertion_order() {
        let db = test_db().await;
        let ids = seed_bakery(&db).await;

        let records = db.sales().list_all().await.unwrap();
        let listed: Vec<i64> = records.iter().map(|r| r.id).collect();
        let products: Vec<&str> = records.iter().map(|r| r.product.as_str()).collect();

        assert_eq!(listed, ids);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(products, vec!["Bread", "Milk", "Bread"]);
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let db = test_db().await;
        assert!(db.sales().list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_register_never_mutates_store() {
        let db = test_db().await;
        seed_bakery(&db).await;

        let sales = db.sales();
        for result in [
            sales.register("", 1.0, 1).await,
            sales.register("   ", 1.0, 1).await,
            sales.register("Milk", -1.0, 1).await,
            sales.register("Milk", f64::INFINITY, 1).await,
            sales.register("Milk", 1.0, -1).await,
        ] {
            let err = result.unwrap_err();
            assert!(err.is_validation(), "unexpected error: {err}");
        }

        assert_eq!(sales.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_unparseable_input_never_reaches_store() {
        let db = test_db().await;

        assert!(matches!(
            NewSale::parse("Milk", "abc", "1"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            NewSale::parse("Milk", "1.0", "1.5"),
            Err(ValidationError::NotAnInteger { .. })
        ));

        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_register_error_names_the_field() {
        let db = test_db().await;

        match db.sales().register("Milk", 1.0, -5).await {
            Err(DbError::Validation(e)) => assert_eq!(e.field(), "quantity"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_find_by_product_is_case_insensitive_exact_match() {
        let db = test_db().await;
        let ids = seed_bakery(&db).await;
        db.sales().register("Breadsticks", 4.0, 1).await.unwrap();

        let found = db.sales().find_by_product("bread").await.unwrap();
        let found_ids: Vec<i64> = found.iter().map(|r| r.id).collect();

        assert_eq!(found_ids, vec![ids[0], ids[2]]);
        assert!(found.iter().all(|r| r.product == "Bread"));

        let found = db.sales().find_by_product("  MILK ").await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_product_folds_accented_letters() {
        let db = test_db().await;
        let pina = db.sales().register("PIÑA", 1.50, 2).await.unwrap();
        let cafe = db.sales().register("Café", 0.90, 3).await.unwrap();
        db.sales().register("Cafe", 0.80, 1).await.unwrap();

        let found: Vec<i64> = db
            .sales()
            .find_by_product("piña")
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(found, vec![pina]);

        let found = db.sales().find_by_product(" CAFÉ ").await.unwrap();
        assert_eq!(found, vec![SaleRecord::new(cafe, "Café", 0.90, 3)]);
    }

    #[tokio::test]
    async fn test_find_by_product_no_match() {
        let db = test_db().await;
        seed_bakery(&db).await;

        assert!(db.sales().find_by_product("Cheese").await.unwrap().is_empty());
        assert!(db.sales().find_by_product("Bre").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_and_is_idempotent() {
        let db = test_db().await;
        let ids = seed_bakery(&db).await;

        assert!(db.sales().delete(ids[1]).await.unwrap());
        assert!(!db.sales().delete(ids[1]).await.unwrap());

        let remaining: Vec<i64> = db
            .sales()
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_store_unchanged() {
        let db = test_db().await;
        seed_bakery(&db).await;

        assert!(!db.sales().delete(999).await.unwrap());
        assert_eq!(db.sales().count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete_all_empties_store() {
        let db = test_db().await;
        seed_bakery(&db).await;

        assert_eq!(db.sales().delete_all().await.unwrap(), 3);
        assert!(db.sales().list_all().await.unwrap().is_empty());

        // Already empty: still succeeds
        assert_eq!(db.sales().delete_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let db = test_db().await;
        let ids = seed_bakery(&db).await;

        db.sales().delete_all().await.unwrap();
        let next = db.sales().register("Eggs", 0.30, 12).await.unwrap();

        assert!(ids.iter().all(|&id| next > id));
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = test_db().await;
        assert!(db.sales().get_by_id(1).await.unwrap().is_none());
    }
}
