use crate::state::AppState;
use axum::http::HeaderValue;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tracing::warn;

/// Allow exactly the configured origin, with credentials.
///
/// Credentialed CORS forbids `*`, so methods and headers are mirrored from
/// the preflight request instead.
pub fn cors_layer(state: Arc<AppState>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    match state.config.cors_origin.trim().parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            warn!(
                origin = %state.config.cors_origin,
                error = %e,
                "CHATLOG_CORS_ORIGIN is not a valid header value; no origin will be allowed"
            );
            cors
        }
    }
}
