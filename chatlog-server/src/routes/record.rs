//! Chat record ingestion.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;
use utoipa::OpenApi;

use crate::config::Config;
use crate::error::ServerError;
use crate::extract::ValidatedJson;
use crate::schemas::record::{ChatRecord, SaveRecordResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(save_record),
    components(schemas(ChatRecord, SaveRecordResponse))
)]
pub struct RecordApi;

/// Register record routes.
///
/// Bodies are unbounded unless `max_body_bytes` is configured, so a record is
/// never refused for the length of its reasoning trace.
pub fn router(config: &Config) -> Router<Arc<AppState>> {
    let body_limit = match config.max_body_bytes {
        Some(max) => DefaultBodyLimit::max(max),
        None => DefaultBodyLimit::disable(),
    };
    Router::new().route("/save-record", post(save_record).layer(body_limit))
}

/// Append one chat record to the record file.
///
/// Each successful call appends exactly one block; identical payloads are
/// appended again.
#[utoipa::path(
    post,
    path = "/save-record",
    tag = "records",
    request_body = ChatRecord,
    responses(
        (status = 200, description = "Record appended", body = SaveRecordResponse),
        (status = 400, description = "Body is not valid JSON"),
        (status = 413, description = "Body exceeds the configured `CHATLOG_MAX_BODY_BYTES`"),
        (status = 415, description = "Missing `Content-Type: application/json`"),
        (status = 422, description = "Missing or mistyped record field"),
        (status = 500, description = "Record file could not be written"),
    )
)]
pub async fn save_record(
    State(state): State<Arc<AppState>>,
    ValidatedJson(record): ValidatedJson<ChatRecord>,
) -> Result<Json<SaveRecordResponse>, ServerError> {
    let bytes = state.records.append(&record).await?;
    info!(chat_id = record.chat_id, bytes, "chat record saved");
    Ok(Json(SaveRecordResponse::success()))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
