use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_db_error, normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct RecentSearchesQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(super) struct RecentSearchItem {
    id: i64,
    product_name: String,
    product_brand: Option<String>,
    product_category: Option<String>,
    location: String,
    results_count: i32,
    searched_at: DateTime<Utc>,
}

pub(super) async fn list_recent_searches(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RecentSearchesQuery>,
) -> Result<Json<ApiResponse<Vec<RecentSearchItem>>>, ApiError> {
    let Some(pool) = state.pool.as_ref() else {
        return Err(ApiError::new(
            req_id.0,
            "not_configured",
            "search history store is not configured",
        ));
    };

    let rows = shopfinder_db::list_recent_searches(pool, normalize_limit(query.limit))
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows
        .into_iter()
        .map(|row| RecentSearchItem {
            id: row.id,
            product_name: row.product_name,
            product_brand: row.product_brand,
            product_category: row.product_category,
            location: row.location,
            results_count: row.results_count,
            searched_at: row.searched_at,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
