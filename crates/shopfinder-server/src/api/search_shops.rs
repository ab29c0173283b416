//! `/functions/v1/search-shops`: web search for nearby retailers.
//!
//! Every method except `OPTIONS` (answered by the CORS layer) runs the
//! search. Every outcome is a 200. Failures are reported in the body's `error` field
//! next to an empty `shops` list so browser callers never see a transport
//! error from this route.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS},
    response::{IntoResponse, Response},
    Json,
};
use shopfinder_core::{SearchShopsRequest, SearchShopsResponse};
use shopfinder_search::shops_from_results;

use super::AppState;

const EDGE_ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Client-Info, Apikey";
const EDGE_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Request bodies above this size are answered with a soft-degraded response.
pub(super) const MAX_BODY_BYTES: usize = 1024 * 1024;

pub(super) async fn search_shops(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "search-shops: unreadable request body");
            return edge_response(SearchShopsResponse::degraded(format!(
                "invalid request body: {}",
                rejection.body_text()
            )));
        }
    };

    let request = match serde_json::from_slice::<SearchShopsRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "search-shops: invalid request body");
            return edge_response(SearchShopsResponse::degraded(format!(
                "invalid request body: {e}"
            )));
        }
    };

    if request.query.trim().is_empty() {
        return edge_response(SearchShopsResponse::degraded("query is required"));
    }

    let Some(client) = state.search.as_ref() else {
        tracing::error!("search-shops: no search API key configured");
        return edge_response(SearchShopsResponse::degraded(
            "Search service not configured",
        ));
    };

    let query = format!("{} phone number address", request.query);
    tracing::info!(query, location = %request.location, "search-shops: searching");

    match client.search(&query).await {
        Ok(results) => {
            let shops = shops_from_results(&results);
            tracing::info!(count = shops.len(), "search-shops: found shops");
            edge_response(SearchShopsResponse::found(shops))
        }
        Err(e) => {
            tracing::error!(error = %e, "search-shops: upstream search failed");
            edge_response(SearchShopsResponse::degraded(e.to_string()))
        }
    }
}

fn edge_response(body: SearchShopsResponse) -> Response {
    (
        [
            (ACCESS_CONTROL_ALLOW_HEADERS, EDGE_ALLOW_HEADERS),
            (ACCESS_CONTROL_ALLOW_METHODS, EDGE_ALLOW_METHODS),
        ],
        Json(body),
    )
        .into_response()
}
