use async_trait::async_trait;
use shopfinder_core::SearchHistoryRecord;
use sqlx::PgPool;

use crate::error::HistoryError;

/// Destination for completed-search records.
#[async_trait]
pub trait HistorySink: Send + Sync {
    async fn save(&self, record: &SearchHistoryRecord) -> Result<(), HistoryError>;
}

/// Appends records to the Postgres `search_history` table.
#[derive(Debug, Clone)]
pub struct PgHistorySink {
    pool: PgPool,
}

impl PgHistorySink {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistorySink for PgHistorySink {
    async fn save(&self, record: &SearchHistoryRecord) -> Result<(), HistoryError> {
        let row = shopfinder_db::insert_search_history(&self.pool, record).await?;
        tracing::debug!(id = row.id, "search history saved");
        Ok(())
    }
}

/// Drops every record. Used when no database is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHistorySink;

#[async_trait]
impl HistorySink for NoopHistorySink {
    async fn save(&self, record: &SearchHistoryRecord) -> Result<(), HistoryError> {
        tracing::debug!(
            product = %record.product_name,
            results = record.results_count,
            "no history store configured; record dropped"
        );
        Ok(())
    }
}
