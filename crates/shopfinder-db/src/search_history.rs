//! Database operations for the `search_history` table.

use chrono::{DateTime, Utc};
use shopfinder_core::SearchHistoryRecord;
use sqlx::PgPool;

use crate::DbError;

/// Upper bound on rows returned by [`list_recent_searches`].
pub const MAX_RECENT_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `search_history` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SearchHistoryRow {
    pub id: i64,
    pub product_name: String,
    pub product_brand: Option<String>,
    pub product_category: Option<String>,
    pub location: String,
    pub results_count: i32,
    pub searched_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Appends one completed search and returns the stored row.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_search_history(
    pool: &PgPool,
    record: &SearchHistoryRecord,
) -> Result<SearchHistoryRow, DbError> {
    let row = sqlx::query_as::<_, SearchHistoryRow>(
        "INSERT INTO search_history \
             (product_name, product_brand, product_category, location, results_count, searched_at) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING id, product_name, product_brand, product_category, location, results_count, \
                   searched_at",
    )
    .bind(&record.product_name)
    .bind(record.product_brand.as_deref())
    .bind(record.product_category.as_deref())
    .bind(&record.location)
    .bind(record.results_count)
    .bind(record.searched_at)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Returns the most recent searches, newest first.
///
/// `limit` is clamped to `1..=MAX_RECENT_LIMIT`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_recent_searches(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<SearchHistoryRow>, DbError> {
    let rows = sqlx::query_as::<_, SearchHistoryRow>(
        "SELECT id, product_name, product_brand, product_category, location, results_count, \
                searched_at \
         FROM search_history \
         ORDER BY searched_at DESC, id DESC \
         LIMIT $1",
    )
    .bind(limit.clamp(1, MAX_RECENT_LIMIT))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
