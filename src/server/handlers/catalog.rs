//! Catalog proxy and health check.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use super::super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Handle GET /api/test-server
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "Server is running" }))
}

/// Handle GET /api/products/search?q= - raw gateway results in the wire shape.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    match state.gateway.search(&params.q).await {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            warn!(gateway = state.gateway.name(), error = %e, "catalog proxy failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch catalog items" })),
            )
                .into_response()
        }
    }
}
