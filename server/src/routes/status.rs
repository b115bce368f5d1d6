//! `GET /api/status`: startup diagnostics as JSON.

use axum::Json;
use axum::extract::State;

use crate::state::{AppState, BackendStatus};

pub async fn backend_status(State(state): State<AppState>) -> Json<BackendStatus> {
    Json(state.backend.as_ref().clone())
}
