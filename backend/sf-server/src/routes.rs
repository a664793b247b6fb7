use crate::{AppState, get_profile, health, register, update_profile};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Headroom for JSON fields around the base64 image
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/profile", get(get_profile).put(update_profile))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .layer(DefaultBodyLimit::max(body_limit(state.limits.max_image_bytes)))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Base64 inflates 3 bytes to 4
fn body_limit(max_image_bytes: usize) -> usize {
    max_image_bytes.div_ceil(3) * 4 + BODY_OVERHEAD_BYTES
}
