//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are converted to a
//! `{"detail": "..."}` JSON body with an appropriate status code.
//!
//! I/O failures expose their underlying error text in `detail`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// All errors that can occur in the chatlog-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The body was valid JSON but did not match the record shape
    /// (missing field, wrong primitive type).
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// The body could not be read as JSON at all.
    #[error("malformed request body: {detail}")]
    MalformedBody { status: StatusCode, detail: String },

    /// Appending to the record file failed.
    #[error("record file error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRecord(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::MalformedBody { status, .. } => *status,
            ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ServerError::InvalidRecord(m) => {
                warn!(detail = %m, "rejected record");
                m.clone()
            }
            ServerError::MalformedBody { detail, .. } => {
                warn!(status = status.as_u16(), detail = %detail, "rejected request body");
                detail.clone()
            }
            ServerError::Io(e) => {
                error!(error = %e, kind = ?e.kind(), "failed to append record");
                e.to_string()
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ServerError::InvalidRecord(e.body_text()),
            other => ServerError::MalformedBody {
                status: other.status(),
                detail: other.body_text(),
            },
        }
    }
}
