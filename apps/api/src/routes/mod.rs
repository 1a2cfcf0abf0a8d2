pub mod health;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, CorsLayer};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/resume/generate", post(handlers::handle_generate))
        .route("/api/v1/resume/health", get(health::health_handler))
        .with_state(state)
}

/// Cross-origin policy for the two local dev frontends. Headers are
/// mirrored rather than wildcarded because credentials are allowed.
pub fn cors_layer() -> CorsLayer {
    let origins = [
        "http://localhost:5173"
            .parse::<HeaderValue>()
            .expect("valid origin"),
        "http://localhost:3000"
            .parse::<HeaderValue>()
            .expect("valid origin"),
    ];

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
