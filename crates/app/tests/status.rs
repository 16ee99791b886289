mod common;

use axum::http::StatusCode;

use crate::common::setup_test_app;

#[tokio::test]
async fn test_version() {
    let app = setup_test_app().await;
    let response = app.client().get("/_status/version").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("\"version\""));
}

#[tokio::test]
async fn test_readiness() {
    let app = setup_test_app().await;
    let response = app.client().get("/_status/readiness").await;
    assert_eq!(response.status, StatusCode::OK);

    std::fs::remove_dir_all(&app.data_dir).unwrap();
    let response = app.client().get("/_status/readiness").await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_static_assets() {
    let app = setup_test_app().await;
    let response = app.client().get("/static/style.css").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("text/css"));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = setup_test_app().await;
    let response = app.client().get("/some/deep/path").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
