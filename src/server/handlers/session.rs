//! Session API handlers.
//!
//! Every mutation runs through [`dispatch`] and answers with the new snapshot
//! plus the effects the UI should perform (play a cue, focus the scan field,
//! show a banner).

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::CatalogItem;
use crate::overrides::MAX_OVERRIDE_CHARS;
use crate::session::{dispatch, Command, Effect, SessionSnapshot};

use super::super::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub snapshot: SessionSnapshot,
    pub effects: Vec<Effect>,
}

#[derive(Debug, Deserialize)]
pub struct NameBody {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct ScanModeBody {
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct ScanBody {
    pub input: String,
}

#[derive(Debug, Deserialize)]
pub struct OverrideBody {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DismissBody {
    pub generation: u64,
}

async fn run(state: &AppState, command: Command) -> Json<CommandResponse> {
    let effects = dispatch(&state.session, state.gateway.as_ref(), command).await;
    let snapshot = state.session.read().await.snapshot(Instant::now());
    Json(CommandResponse { snapshot, effects })
}

/// Handle GET /api/session
pub async fn snapshot(State(state): State<Arc<AppState>>) -> Json<SessionSnapshot> {
    Json(state.session.read().await.snapshot(Instant::now()))
}

/// Handle POST /api/session/toggle
pub async fn toggle(
    State(state): State<Arc<AppState>>,
    Json(item): Json<CatalogItem>,
) -> Json<CommandResponse> {
    run(&state, Command::Toggle(item)).await
}

/// Handle POST /api/session/remove
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NameBody>,
) -> Json<CommandResponse> {
    run(&state, Command::Remove(body.name)).await
}

/// Handle POST /api/session/clear
pub async fn clear(State(state): State<Arc<AppState>>) -> Json<CommandResponse> {
    run(&state, Command::Clear).await
}

/// Handle POST /api/session/search - manual search, resolved before responding.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SearchBody>,
) -> Json<CommandResponse> {
    run(&state, Command::ManualSearch(body.query)).await
}

/// Handle POST /api/session/scan-mode
pub async fn scan_mode(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ScanModeBody>,
) -> Json<CommandResponse> {
    run(&state, Command::SetScanMode(body.enabled)).await
}

/// Handle POST /api/session/scan - a completed scan entry.
pub async fn scan(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ScanBody>,
) -> Json<CommandResponse> {
    run(&state, Command::ScanSubmit(body.input)).await
}

/// Handle POST /api/session/override
pub async fn set_override(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OverrideBody>,
) -> Result<Json<CommandResponse>, (StatusCode, String)> {
    if body.text.trim().chars().count() > MAX_OVERRIDE_CHARS {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Display name must be at most {} characters", MAX_OVERRIDE_CHARS),
        ));
    }
    Ok(run(
        &state,
        Command::SetOverride {
            name: body.name,
            text: body.text,
        },
    )
    .await)
}

/// Handle POST /api/session/override/reset
pub async fn reset_override(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NameBody>,
) -> Json<CommandResponse> {
    run(&state, Command::ResetOverride(body.name)).await
}

/// Handle POST /api/session/feedback/dismiss
pub async fn dismiss_feedback(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DismissBody>,
) -> Json<CommandResponse> {
    run(&state, Command::DismissFeedback(body.generation)).await
}
