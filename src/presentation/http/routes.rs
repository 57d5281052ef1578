//! Route Configuration
//!
//! Configures all HTTP routes.

use axum::{middleware, response::IntoResponse, routing::get, Router};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::optional_auth_middleware;
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(feed_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Home feed routes (guests and signed-in users)
fn feed_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::home))
        .route("/home", get(handlers::home::home))
        .route_layer(middleware::from_fn_with_state(
            state,
            optional_auth_middleware,
        ))
}
