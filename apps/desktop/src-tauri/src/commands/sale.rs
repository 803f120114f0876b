//! # Sale Commands

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use ventas_core::{NewSale, SaleRecord, SalesSummary, ValidationError};
use ventas_db::Database;

/// Warning shown when any form field is blank.
pub const FILL_EVERY_FIELD: &str = "Fill in every field.";

/// Warning shown when price or quantity does not parse.
pub const NUMBERS_REQUIRED: &str = "Price and quantity must be numbers.";

/// Warning shown when delete is pressed with no row selected.
pub const SELECT_A_SALE: &str = "Select a sale to delete.";

/// Prefix of amounts in the statistics notice.
const CURRENCY_PREFIX: &str = "$";

/// Notice shown by statistics on an empty store.
pub const NO_SALES: &str = "No sales recorded.";

/// Raw form fields, exactly as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleForm {
    pub product: String,
    pub price: String,
    pub quantity: String,
}

impl SaleForm {
    fn has_blank_field(&self) -> bool {
        [&self.product, &self.price, &self.quantity]
            .iter()
            .any(|field| field.trim().is_empty())
    }

    /// Turns the raw fields into a validated sale.
    fn parse(&self) -> Result<NewSale, ApiError> {
        if self.has_blank_field() {
            return Err(ApiError::validation(FILL_EVERY_FIELD));
        }

        NewSale::parse(&self.product, &self.price, &self.quantity).map_err(|err| match err {
            ValidationError::InvalidNumber { .. }
            | ValidationError::NotAnInteger { .. }
            | ValidationError::NotFinite { .. } => ApiError::validation(NUMBERS_REQUIRED),
            other => other.into(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSaleResponse {
    pub sale_id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSaleResponse {
    pub sale_id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    /// `None` when nothing has been recorded.
    pub summary: Option<SalesSummary>,
    pub message: String,
}

/// All records, ordered by id. Also backs the refresh button.
pub async fn list_sales(db: &Database) -> Result<Vec<SaleRecord>, ApiError> {
    debug!("list_sales command");
    Ok(db.sales().list_all().await?)
}

pub async fn register_sale(db: &Database, form: &SaleForm) -> Result<RegisterSaleResponse, ApiError> {
    debug!(product = %form.product, "register_sale command");

    let sale = form.parse()?;
    let sale_id = db.sales().insert(&sale).await?;

    info!(sale_id, product = %sale.product(), "Sale registered from form");

    Ok(RegisterSaleResponse {
        sale_id,
        message: "Sale registered.".to_string(),
    })
}

pub async fn delete_sale(db: &Database, selected: Option<i64>) -> Result<DeleteSaleResponse, ApiError> {
    debug!(?selected, "delete_sale command");

    let sale_id = selected.ok_or_else(|| ApiError::validation(SELECT_A_SALE))?;

    if !db.sales().delete(sale_id).await? {
        return Err(ApiError::not_found("Sale", sale_id));
    }

    info!(sale_id, "Sale deleted from form");

    Ok(DeleteSaleResponse {
        sale_id,
        message: "Sale deleted.".to_string(),
    })
}

pub async fn show_statistics(db: &Database) -> Result<StatisticsResponse, ApiError> {
    debug!("show_statistics command");

    let summary = db.reports().summarize().await?;

    let message = match &summary {
        None => NO_SALES.to_string(),
        Some(s) => format!(
            "Total sales: {CURRENCY_PREFIX}{:.2}\nBest-selling product: {}\nAverage price: {CURRENCY_PREFIX}{:.2}",
            s.total_revenue, s.top_product, s.average_unit_price
        ),
    };

    Ok(StatisticsResponse { summary, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use ventas_db::DbConfig;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn form(product: &str, price: &str, quantity: &str) -> SaleForm {
        SaleForm {
            product: product.to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_list() {
        let db = test_db().await;

        let response = register_sale(&db, &form("  Bread ", "2.50", "4")).await.unwrap();
        assert_eq!(response.message, "Sale registered.");

        let sales = list_sales(&db).await.unwrap();
        assert_eq!(sales, vec![SaleRecord::new(response.sale_id, "Bread", 2.5, 4)]);
    }

    #[tokio::test]
    async fn test_blank_field_is_rejected() {
        let db = test_db().await;

        for f in [form("", "1", "1"), form("Milk", " ", "1"), form("Milk", "1", "")] {
            let err = register_sale(&db, &f).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
            assert_eq!(err.message, FILL_EVERY_FIELD);
        }

        assert!(list_sales(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_numbers_are_rejected() {
        let db = test_db().await;

        for f in [form("Milk", "abc", "1"), form("Milk", "1.2", "2.5"), form("Milk", "inf", "1")] {
            let err = register_sale(&db, &f).await.unwrap_err();
            assert_eq!(err.message, NUMBERS_REQUIRED);
        }

        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_negative_values_are_rejected() {
        let db = test_db().await;

        let err = register_sale(&db, &form("Milk", "-1", "1")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("negative"));

        assert_eq!(db.sales().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_requires_selection() {
        let db = test_db().await;

        let err = delete_sale(&db, None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, SELECT_A_SALE);
    }

    #[tokio::test]
    async fn test_delete_selected_sale() {
        let db = test_db().await;
        let first = register_sale(&db, &form("Bread", "2.5", "4")).await.unwrap();
        let second = register_sale(&db, &form("Milk", "1.2", "5")).await.unwrap();

        let response = delete_sale(&db, Some(first.sale_id)).await.unwrap();
        assert_eq!(response.sale_id, first.sale_id);

        let remaining: Vec<i64> = list_sales(&db).await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(remaining, vec![second.sale_id]);
    }

    #[tokio::test]
    async fn test_delete_unknown_sale() {
        let db = test_db().await;

        let err = delete_sale(&db, Some(99)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_statistics_empty_store() {
        let db = test_db().await;

        let response = show_statistics(&db).await.unwrap();
        assert!(response.summary.is_none());
        assert_eq!(response.message, NO_SALES);
    }

    #[tokio::test]
    async fn test_statistics_message() {
        let db = test_db().await;
        register_sale(&db, &form("Bread", "2.50", "4")).await.unwrap();
        register_sale(&db, &form("Milk", "1.20", "10")).await.unwrap();
        register_sale(&db, &form("Bread", "2.50", "1")).await.unwrap();

        let response = show_statistics(&db).await.unwrap();

        let summary = response.summary.unwrap();
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.top_product, "Milk");
        assert_eq!(
            response.message,
            "Total sales: $24.50\nBest-selling product: Milk\nAverage price: $2.07"
        );
    }
}
