//! # IPC Wrappers
//!
//! `#[tauri::command]` entry points. Each one pulls its state out of the
//! runtime and delegates to [`super::sale`].

use tauri::State;

use super::sale::{
    self, DeleteSaleResponse, RegisterSaleResponse, SaleForm, StatisticsResponse,
};
use crate::error::ApiError;
use crate::state::DbState;
use ventas_core::SaleRecord;

#[tauri::command]
pub async fn list_sales(db: State<'_, DbState>) -> Result<Vec<SaleRecord>, ApiError> {
    sale::list_sales((*db).inner()).await
}

#[tauri::command]
pub async fn register_sale(
    db: State<'_, DbState>,
    form: SaleForm,
) -> Result<RegisterSaleResponse, ApiError> {
    sale::register_sale((*db).inner(), &form).await
}

#[tauri::command]
pub async fn delete_sale(
    db: State<'_, DbState>,
    selected: Option<i64>,
) -> Result<DeleteSaleResponse, ApiError> {
    sale::delete_sale((*db).inner(), selected).await
}

#[tauri::command]
pub async fn show_statistics(db: State<'_, DbState>) -> Result<StatisticsResponse, ApiError> {
    sale::show_statistics((*db).inner()).await
}
