//! Composition root: liveness, CORS and body limit

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;

use crate::common::{parse_body, request, TestApp};

#[tokio::test]
async fn test_root_and_health_answer_plain_text() {
    let app = TestApp::new();

    let response = app.send(request(Method::GET, "/", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await, json!("Job server is running"));

    let response = app.send(request(Method::GET, "/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await, json!("OK"));
}

#[tokio::test]
async fn test_cors_allows_credentialed_requests_from_known_origin() {
    let app = TestApp::new();
    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/job-application")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.send(preflight).await;
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let app = TestApp::new();
    let response = app
        .send(
            Request::builder()
                .method(Method::GET)
                .uri("/health")
                .header(header::ORIGIN, "https://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = TestApp::new();
    let padding = "x".repeat(jobboard_app::MAX_BODY_BYTES + 1);
    let response = app
        .send(request(
            Method::POST,
            "/jobs",
            Some(json!({ "title": "Engineer", "description": padding })),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
