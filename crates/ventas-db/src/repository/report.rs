//! # Report Repository
//!
//! Statistics over the current set of stored sales.
//!
//! Every call reads the full table and recomputes from scratch via
//! [`ventas_core::report::summarize`]; nothing is cached between calls.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use crate::repository::sale::SaleRepository;
use ventas_core::report::{self, SalesSummary};

/// Repository for on-demand sales statistics.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    sales: SaleRepository,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository {
            sales: SaleRepository::new(pool),
        }
    }

    /// Summarizes all stored sales.
    ///
    /// Returns `Ok(None)` when there are no sales.
    pub async fn summarize(&self) -> DbResult<Option<SalesSummary>> {
        let records = self.sales.list_all().await?;
        let summary = report::summarize(&records);

        debug!(
            count = records.len(),
            has_data = summary.is_some(),
            "Computed sales summary"
        );
        Ok(summary)
    }
}
