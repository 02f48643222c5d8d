//! Layout and printable sheet handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::layout::{LabelSheet, COLUMNS};
use crate::render;

use super::super::state::AppState;

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub sheet: LabelSheet,
    pub occupied: usize,
    pub columns: usize,
    pub generated_at: DateTime<Local>,
}

#[derive(Debug, Deserialize)]
pub struct SheetParams {
    /// Open the print dialog on load (default: true).
    #[serde(default)]
    pub auto_print: Option<bool>,
}

async fn current_sheet(state: &AppState) -> Result<LabelSheet, (StatusCode, String)> {
    state.session.read().await.layout().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Layout failed: {}", e),
        )
    })
}

/// Handle GET /api/session/layout - the 32 slots as JSON.
pub async fn layout(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LayoutResponse>, (StatusCode, String)> {
    let sheet = current_sheet(&state).await?;
    Ok(Json(LayoutResponse {
        occupied: sheet.occupied(),
        columns: COLUMNS,
        sheet,
        generated_at: Local::now(),
    }))
}

/// Handle GET /print - printable HTML sheet.
pub async fn sheet(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SheetParams>,
) -> Result<Html<String>, (StatusCode, String)> {
    let sheet = current_sheet(&state).await?;
    let auto_print = params.auto_print.unwrap_or(true);
    Ok(Html(render::render_html(&sheet, Local::now(), auto_print)))
}
