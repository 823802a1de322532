//! Health endpoint: reports whether the record file can currently be appended.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::schemas::health::HealthResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health), components(schemas(HealthResponse)))]
pub struct HealthApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

/// 200 with `"ok"` when the record directory is writable, 503 with
/// `"degraded"` when appends would fail. Never creates or touches the file.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Records can be appended", body = HealthResponse),
        (status = 503, description = "Record directory missing or read-only", body = HealthResponse),
    )
)]
pub async fn get_health(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let writable = state.records.directory_writable().await;
    let (status, label) = if writable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };
    (
        status,
        Json(HealthResponse {
            status: label.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            record_path: state.records.path().display().to_string(),
            record_dir_writable: writable,
        }),
    )
}
