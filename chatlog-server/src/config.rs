//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for chatlog-server.
///
/// Every field has a default so the server works out-of-the-box without any
/// environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"127.0.0.1:8000"`).
    pub bind_address: String,

    /// Append-only text file that receives formatted chat records
    /// (default: `"record.txt"`, relative to the working directory).
    pub record_path: String,

    /// The single browser origin allowed to call the API with credentials
    /// (default: `"http://localhost:8080"`).
    pub cors_origin: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Serve Swagger UI and the OpenAPI document.
    pub enable_swagger: bool,

    /// Upper bound on a `POST /save-record` body in bytes. `None` (the
    /// default) accepts records of any size.
    pub max_body_bytes: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_owned(),
            record_path: "record.txt".to_owned(),
            cors_origin: "http://localhost:8080".to_owned(),
            log_level: "info".to_owned(),
            log_json: false,
            enable_swagger: true,
            max_body_bytes: None,
        }
    }
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_address: env_or("CHATLOG_BIND", defaults.bind_address),
            record_path: env_or("CHATLOG_RECORD_PATH", defaults.record_path),
            cors_origin: env_or("CHATLOG_CORS_ORIGIN", defaults.cors_origin),
            log_level: env_or("CHATLOG_LOG", defaults.log_level),
            log_json: env_flag("CHATLOG_LOG_JSON", defaults.log_json),
            enable_swagger: env_flag("CHATLOG_ENABLE_SWAGGER", defaults.enable_swagger),
            max_body_bytes: std::env::var("CHATLOG_MAX_BODY_BYTES")
                .ok()
                .and_then(|v| parse_byte_limit(&v))
                .or(defaults.max_body_bytes),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw == "1" || raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw == "0" || raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// `0` or an unparsable value means "no limit".
fn parse_byte_limit(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|n| *n > 0)
}
