//! Tests for root, health, fallback and router-wide layers.

use axum::http::{Request, StatusCode, header};
use axum::body::Body;

use crate::api::test_helpers::{get, json_body, send, test_app};
use crate::api::{AppState, create_router};
use crate::db::{Database, SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn root_reports_running() {
    let (app, _) = test_app().await;

    for uri in ["/api/", "/api"] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["message"], "Portfolio API is running");
        assert_eq!(body["status"], "healthy");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn health_returns_ok() {
    let (app, _) = test_app().await;

    let response = send(&app, get("/api/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_route_is_404_with_detail() {
    let (app, _) = test_app().await;

    let response = send(&app, get("/api/nope")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["detail"], "Not Found");
}

#[tokio::test(flavor = "multi_thread")]
async fn cors_allows_any_origin() {
    let (app, _) = test_app().await;

    let request = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "https://somewhere.example")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn cors_preflight_succeeds() {
    let (app, _) = test_app().await;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/contact")
        .header(header::ORIGIN, "https://somewhere.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert!(response.status().is_success());
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn docs_hidden_unless_enabled() {
    let (app, _) = test_app().await;
    let response = send(&app, get("/api/docs")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    let app = create_router(AppState::new(db), true);
    let response = send(&app, get("/api/docs")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
