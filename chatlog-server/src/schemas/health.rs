use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `"ok"` when records can be appended, `"degraded"` otherwise.
    pub status: String,
    pub version: String,
    /// Record file path as configured.
    pub record_path: String,
    /// Whether the record file's directory exists and is not read-only.
    pub record_dir_writable: bool,
}
