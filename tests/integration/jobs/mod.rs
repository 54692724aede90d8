//! Job postings: create, fetch and list

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{parse_body, request, TestApp};

#[tokio::test]
async fn test_created_job_is_returned_with_submitted_fields() {
    let app = TestApp::new();
    let submitted = json!({
        "title": "Backend Engineer",
        "company": "Acme",
        "company_logo": "https://acme.example/logo.png",
        "location": "Dhaka",
        "jobType": "Remote",
        "category": "Engineering",
        "hr_email": "hr@acme.example",
        "requirements": ["Rust", "SQL"],
        "salaryRange": { "min": 1000, "max": 2000, "currency": "usd" },
    });

    let (status, ack) = app
        .send_json(request(Method::POST, "/jobs", Some(submitted.clone())))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["acknowledged"], true);
    let id = ack["insertedId"].as_str().unwrap();

    let job = app.get_job(id).await;
    assert_eq!(job["_id"], id);
    for (field, value) in submitted.as_object().unwrap() {
        assert_eq!(&job[field], value, "field {field}");
    }
    assert!(job.get("applicationCount").is_none());
}

#[tokio::test]
async fn test_any_json_value_round_trips_unchanged() {
    let app = TestApp::new();
    let submitted = json!({
        "title": 123,
        "company": ["Acme", "Subsidiary"],
        "company_logo": null,
        "hr_email": "hr@acme.example",
    });

    let id = app.create_job(submitted.clone()).await;
    let job = app.get_job(&id).await;

    let mut expected = submitted;
    expected["_id"] = json!(id);
    assert_eq!(job, expected);
}

#[tokio::test]
async fn test_malformed_job_body_is_validation_error() {
    let app = TestApp::new();
    let response = app
        .send(
            axum::http::Request::post("/jobs")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{\"title\": \"Engineer\""))
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].is_string());

    let (status, body) = app
        .send_json(
            axum::http::Request::post("/jobs")
                .body(axum::body::Body::from(r#"{"title": "Engineer"}"#))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let app = TestApp::new();
    let id = app
        .create_job(json!({ "_id": "chosen-by-client", "title": "Engineer" }))
        .await;

    assert_ne!(id, "chosen-by-client");
    assert_eq!(app.get_job(&id).await["_id"], id);
}

#[tokio::test]
async fn test_missing_job_is_null() {
    let app = TestApp::new();
    assert_eq!(app.get_job(&Uuid::new_v4().to_string()).await, Value::Null);
}

#[tokio::test]
async fn test_malformed_job_id_is_bad_request() {
    let app = TestApp::new();
    let response = app.send(request(Method::GET, "/jobs/12345", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_filters_by_hr_email() {
    let app = TestApp::new();
    app.create_job(json!({ "title": "First", "hr_email": "hr@acme.example" }))
        .await;
    app.create_job(json!({ "title": "Elsewhere", "hr_email": "hr@other.example" }))
        .await;
    app.create_job(json!({ "title": "Second", "hr_email": "hr@acme.example" }))
        .await;

    let (status, all) = app.send_json(request(Method::GET, "/jobs", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, owned) = app
        .send_json(request(Method::GET, "/jobs?email=hr@acme.example", None))
        .await;
    let titles: Vec<&str> = owned
        .as_array()
        .unwrap()
        .iter()
        .map(|job| job["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);

    let (_, unfiltered) = app.send_json(request(Method::GET, "/jobs?email=", None)).await;
    assert_eq!(unfiltered.as_array().unwrap().len(), 3);
}
