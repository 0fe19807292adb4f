//! API handlers for the library request REST endpoints

pub mod health;
pub mod middleware;
pub mod openapi;
pub mod requests;

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let server = state.config.server.clone();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Requests
        .route(
            "/request",
            get(requests::list_requests).post(requests::create_request),
        )
        .route(
            "/request/:id",
            get(requests::get_request).delete(requests::delete_request),
        )
        .with_state(state)
        .merge(openapi::create_openapi_router())
        // A timed-out handler is dropped, rolling back its open transaction
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(cors);

    if server.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    if server.enable_request_correlation {
        router = router.layer(middleware::correlation_id_layer());
    }

    router
}
