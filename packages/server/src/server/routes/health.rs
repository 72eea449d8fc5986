use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    active_sessions: usize,
}

/// Health check endpoint
///
/// The service has no backing store, so it is healthy whenever it answers.
/// The Overpass API is not probed; public instances rate-limit aggressively.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            active_sessions: state.sessions.len().await,
        }),
    )
}
