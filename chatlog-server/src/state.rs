//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::config::Config;
use crate::record_log::RecordLog;

/// State shared across all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Append-only record file.
    pub records: Arc<RecordLog>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let records = RecordLog::new(&config.record_path);
        Self {
            config: Arc::new(config),
            records: Arc::new(records),
        }
    }
}
