//! Errors returned by HTTP handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domains::extraction::ExportError;
use crate::domains::session::SessionId;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("no extraction results to export")]
    NothingToExport,

    #[error("report export failed: {0}")]
    Export(#[from] ExportError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) | ApiError::NothingToExport => StatusCode::NOT_FOUND,
            ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
