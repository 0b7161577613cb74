//! Axum router configuration

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use super::handlers::{download_transcript, status};

/// Create the Axum router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/status", get(status))
        .route("/transcript", get(download_transcript))
        .layer(TraceLayer::new_for_http());

    if state.config.cors_enabled {
        // Safari and other modern browsers want the allowed headers
        // spelled out explicitly.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS, Method::HEAD])
            .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
            .max_age(Duration::from_secs(3600));
        router = router.layer(cors);
    }

    router.with_state(state)
}
