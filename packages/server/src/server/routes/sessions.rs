//! Session endpoints.
//!
//! POST   /api/sessions                  -> new Empty session
//! GET    /api/sessions/:id              -> current state
//! DELETE /api/sessions/:id
//! POST   /api/sessions/:id/extract      -> run one extraction
//! POST   /api/sessions/:id/reset        -> back to Empty
//! GET    /api/sessions/:id/report.csv   -> geo-report download
//!
//! Extraction outcomes come back as a notice next to the (possibly unchanged)
//! session, so the front end can show the message and redraw in one step.

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::common::DrawOutput;
use crate::domains::extraction::{
    extract_buildings, to_csv, BuildingRecord, ExtractionOutcome, REPORT_FILE_NAME,
};
use crate::domains::session::{Marker, SessionId, SessionPhase, SessionState, Viewport};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

pub const NO_POLYGON_MESSAGE: &str = "Please draw a polygon on the map first.";
pub const NO_BUILDINGS_MESSAGE: &str = "No valid buildings found in this selection.";

// =============================================================================
// Payloads
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub id: SessionId,
    pub phase: SessionPhase,
    pub viewport: Viewport,
    pub records: Vec<BuildingRecord>,
    pub markers: Vec<Marker>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionView {
    pub fn new(id: SessionId, state: &SessionState) -> Self {
        Self {
            id,
            phase: state.phase(),
            viewport: state.viewport,
            records: state.records().to_vec(),
            markers: state.markers().to_vec(),
            created_at: state.created_at,
            updated_at: state.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub draw: DrawOutput,
    /// Map view when the button was pressed.
    #[serde(default)]
    pub view: Option<Viewport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub notice: Notice,
    pub session: SessionView,
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn create_session_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<SessionView>) {
    let (id, session) = state.sessions.create_session().await;
    info!(session_id = %id, "Session created");

    (StatusCode::CREATED, Json(SessionView::new(id, &session)))
}

pub async fn get_session_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionView>, ApiError> {
    let session = state
        .sessions
        .get_session(id)
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    Ok(Json(SessionView::new(id, &session)))
}

pub async fn delete_session_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, ApiError> {
    if !state.sessions.delete_session(id).await {
        return Err(ApiError::SessionNotFound(id));
    }

    info!(session_id = %id, "Session deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Run one extraction for the session.
///
/// Only a non-empty result changes the session. A missing polygon or an
/// empty result is a warning; any failure along the way is reported as one
/// generic extraction error with a 502.
pub async fn extract_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<SessionId>,
    Json(request): Json<ExtractRequest>,
) -> Result<(StatusCode, Json<ExtractResponse>), ApiError> {
    let current = state
        .sessions
        .get_session(id)
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    let (status, notice, session) = match extract_buildings(&request.draw, &state.deps).await {
        Ok(ExtractionOutcome::NoPolygon) => {
            (StatusCode::OK, Notice::warning(NO_POLYGON_MESSAGE), current)
        }
        Ok(ExtractionOutcome::NoBuildings) => {
            info!(session_id = %id, "Extraction found no buildings");
            (StatusCode::OK, Notice::warning(NO_BUILDINGS_MESSAGE), current)
        }
        Ok(ExtractionOutcome::Extracted(records)) => {
            let count = records.len();
            let updated = state
                .sessions
                .apply_extraction(id, records, request.view)
                .await
                .ok_or(ApiError::SessionNotFound(id))?;
            info!(session_id = %id, records = count, "Extraction stored");

            (
                StatusCode::OK,
                Notice::success(format!("Extracted {} records with GPS data.", count)),
                updated,
            )
        }
        Err(e) => {
            error!(session_id = %id, error = %format!("{:#}", e), "Extraction failed");
            (
                StatusCode::BAD_GATEWAY,
                Notice::error(format!("Extraction error: {:#}", e)),
                current,
            )
        }
    };

    Ok((
        status,
        Json(ExtractResponse {
            notice,
            session: SessionView::new(id, &session),
        }),
    ))
}

pub async fn reset_session_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<SessionView>, ApiError> {
    let session = state
        .sessions
        .reset_session(id)
        .await
        .ok_or(ApiError::SessionNotFound(id))?;
    info!(session_id = %id, "Session reset");

    Ok(Json(SessionView::new(id, &session)))
}

/// CSV download of the session's current records.
pub async fn report_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<SessionId>,
) -> Result<Response, ApiError> {
    let session = state
        .sessions
        .get_session(id)
        .await
        .ok_or(ApiError::SessionNotFound(id))?;

    if session.phase() == SessionPhase::Empty {
        return Err(ApiError::NothingToExport);
    }

    let body = to_csv(session.records())?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", REPORT_FILE_NAME),
            ),
        ],
        body,
    )
        .into_response())
}
