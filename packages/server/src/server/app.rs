//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::session::SessionStore;
use crate::kernel::ServerDeps;
use crate::server::routes::{
    create_session_handler, delete_session_handler, extract_handler, get_session_handler,
    health_handler, report_handler, reset_session_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
    pub sessions: SessionStore,
}

impl AxumAppState {
    pub fn new(deps: ServerDeps, sessions: SessionStore) -> Self {
        Self {
            deps: Arc::new(deps),
            sessions,
        }
    }
}

/// Build the Axum application router
///
/// `allowed_origins` empty means any origin may call the API (development).
pub fn build_app(state: AxumAppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Session lifecycle
        .route("/api/sessions", post(create_session_handler))
        .route(
            "/api/sessions/:id",
            get(get_session_handler).delete(delete_session_handler),
        )
        // Session transitions
        .route("/api/sessions/:id/extract", post(extract_handler))
        .route("/api/sessions/:id/reset", post(reset_session_handler))
        // Export
        .route("/api/sessions/:id/report.csv", get(report_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
