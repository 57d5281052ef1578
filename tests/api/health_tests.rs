//! Health and Metrics API Tests

use axum::http::StatusCode;

use crate::common::{MockPostRepo, MockUserRepo, TestApp};

fn app() -> TestApp {
    TestApp::new(MockPostRepo::new(), MockUserRepo::new())
}

#[tokio::test]
async fn test_health_check_returns_ok() {
    let response = app().server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_liveness_probe() {
    let response = app().server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_fails_without_database() {
    let response = app().server.get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_metrics_exposed_after_feed_request() {
    let app = app();
    app.server.get("/").await;

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    assert!(response.text().contains("blog_feed_feed_requests_total"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = app().server.get("/does/not/exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<serde_json::Value>()["code"], 10001);
}
