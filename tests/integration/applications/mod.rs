//! Job applications: counter updates, enrichment, guarded listing, mutations

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::{request, with_cookie, TestApp};

fn acme_job() -> serde_json::Value {
    json!({
        "title": "Backend Engineer",
        "company": "Acme",
        "company_logo": "https://acme.example/logo.png",
        "location": "Dhaka",
        "jobType": "Remote",
        "category": "Engineering",
        "hr_email": "hr@acme.example",
        "deadline": "2026-12-31",
    })
}

#[tokio::test]
async fn test_accumulate_mode_counts_each_application() {
    let app = TestApp::with_env(&[("APPLICATION_COUNT_MODE", "accumulate")]);
    let job_id = app.create_job(acme_job()).await;

    for (n, email) in ["a@x.com", "b@x.com", "c@x.com"].iter().enumerate() {
        let (status, ack) = app.apply(&job_id, email).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ack["acknowledged"], true);
        assert!(ack["insertedId"].is_string());
        assert_eq!(app.get_job(&job_id).await["applicationCount"], n as u64 + 1);
    }
}

#[tokio::test]
async fn test_default_mode_always_writes_one() {
    let app = TestApp::new();
    let job_id = app.create_job(acme_job()).await;

    app.apply(&job_id, "a@x.com").await;
    app.apply(&job_id, "b@x.com").await;

    assert_eq!(app.get_job(&job_id).await["applicationCount"], 1);
}

#[tokio::test]
async fn test_submitted_counter_cannot_push_past_the_limit() {
    let app = TestApp::with_env(&[("APPLICATION_COUNT_MODE", "accumulate")]);
    let mut job = acme_job();
    job["applicationCount"] = json!(i64::MAX);
    let job_id = app.create_job(job).await;
    assert!(app.get_job(&job_id).await.get("applicationCount").is_none());

    let (status, _) = app.apply(&job_id, "a@x.com").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.apply(&job_id, "b@x.com").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(app.get_job(&job_id).await["applicationCount"], 2);
    let (status, _) = app.send_json(request(Method::GET, "/jobs", None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_application_payload_is_stored_as_sent() {
    let app = TestApp::new();
    let job_id = app.create_job(acme_job()).await;

    let (status, _) = app
        .send_json(request(
            Method::POST,
            "/job-applications",
            Some(json!({
                "jobId": job_id,
                "applicant_email": "a@x.com",
                "expected_salary": 1200,
                "portfolio": null,
            })),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = app
        .send_json(request(
            Method::GET,
            &format!("/job-application/jobs/{job_id}"),
            None,
        ))
        .await;
    let stored = &listed.as_array().unwrap()[0];
    assert_eq!(stored["expected_salary"], 1200);
    assert!(stored.as_object().unwrap().contains_key("portfolio"));
    assert!(stored["portfolio"].is_null());
}

#[tokio::test]
async fn test_malformed_application_body_is_validation_error() {
    let app = TestApp::new();
    let response = app
        .send(
            axum::http::Request::post("/job-applications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from("{\"jobId\":"))
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = crate::common::parse_body(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_application_for_missing_job_stores_nothing() {
    let app = TestApp::new();
    let missing = Uuid::new_v4().to_string();

    let (status, body) = app.apply(&missing, "a@x.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (_, listed) = app
        .send_json(request(
            Method::GET,
            &format!("/job-application/jobs/{missing}"),
            None,
        ))
        .await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_application_without_job_id_is_bad_request() {
    let app = TestApp::new();
    let (status, body) = app
        .send_json(request(
            Method::POST,
            "/job-applications",
            Some(json!({ "applicant_email": "a@x.com" })),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_applicant_listing_is_enriched_and_scoped_to_session() {
    let app = TestApp::new();
    let job_id = app.create_job(acme_job()).await;
    app.apply(&job_id, "a@x.com").await;
    app.apply(&job_id, "b@x.com").await;

    let (status, _) = app
        .send_json(request(Method::GET, "/job-application?email=a@x.com", None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let cookie_b = app.login("b@x.com").await;
    let (status, body) = app
        .send_json(with_cookie("/job-application?email=a@x.com", &cookie_b))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "forbidden access");

    let cookie_a = app.login("a@x.com").await;
    let (status, listed) = app
        .send_json(with_cookie("/job-application?email=a@x.com", &cookie_a))
        .await;
    assert_eq!(status, StatusCode::OK);

    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    let application = &listed[0];
    assert_eq!(application["applicant_email"], "a@x.com");
    assert_eq!(application["jobId"], job_id.as_str());
    assert_eq!(application["resume"], "https://cv.example/resume.pdf");
    assert_eq!(application["title"], "Backend Engineer");
    assert_eq!(application["company"], "Acme");
    assert_eq!(application["company_logo"], "https://acme.example/logo.png");
    assert_eq!(application["location"], "Dhaka");
    assert_eq!(application["jobType"], "Remote");
    assert_eq!(application["category"], "Engineering");
    // Only the listed metadata is copied from the job
    assert!(application.get("hr_email").is_none());
    assert!(application.get("deadline").is_none());
}

#[tokio::test]
async fn test_open_applicant_listing_when_guard_disabled() {
    let app = TestApp::with_env(&[("REQUIRE_APPLICANT_AUTH", "false")]);
    let job_id = app.create_job(acme_job()).await;
    app.apply(&job_id, "a@x.com").await;

    let (status, listed) = app
        .send_json(request(Method::GET, "/job-application?email=a@x.com", None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["title"], "Backend Engineer");
}

#[tokio::test]
async fn test_applications_for_job_are_raw() {
    let app = TestApp::new();
    let job_id = app.create_job(acme_job()).await;
    let other_job = app.create_job(json!({ "title": "Other" })).await;
    app.apply(&job_id, "a@x.com").await;
    app.apply(&job_id, "b@x.com").await;
    app.apply(&other_job, "c@x.com").await;

    let (status, listed) = app
        .send_json(request(
            Method::GET,
            &format!("/job-application/jobs/{job_id}"),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);

    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    for application in listed {
        assert_eq!(application["jobId"], job_id.as_str());
        assert!(application.get("title").is_none());
    }
}

#[tokio::test]
async fn test_status_update_reports_matched_and_modified() {
    let app = TestApp::new();
    let job_id = app.create_job(acme_job()).await;
    let (_, ack) = app.apply(&job_id, "a@x.com").await;
    let id = ack["insertedId"].as_str().unwrap().to_string();
    let uri = format!("/job-application/{id}");

    let (status, ack) = app
        .send_json(request(Method::PATCH, &uri, Some(json!({ "status": "Interview" }))))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        ack,
        json!({
            "acknowledged": true,
            "matchedCount": 1,
            "modifiedCount": 1,
            "upsertedCount": 0,
            "upsertedId": null,
        })
    );

    let (_, ack) = app
        .send_json(request(Method::PATCH, &uri, Some(json!({ "status": "Interview" }))))
        .await;
    assert_eq!(ack["matchedCount"], 1);
    assert_eq!(ack["modifiedCount"], 0);

    let (_, listed) = app
        .send_json(request(
            Method::GET,
            &format!("/job-application/jobs/{job_id}"),
            None,
        ))
        .await;
    assert_eq!(listed[0]["status"], "Interview");

    let (_, ack) = app
        .send_json(request(
            Method::PATCH,
            &format!("/job-application/{}", Uuid::new_v4()),
            Some(json!({ "status": "Hired" })),
        ))
        .await;
    assert_eq!(ack["matchedCount"], 0);
}

#[tokio::test]
async fn test_delete_application() {
    let app = TestApp::new();
    let job_id = app.create_job(acme_job()).await;
    let (_, ack) = app.apply(&job_id, "a@x.com").await;
    let uri = format!("/job-applications/{}", ack["insertedId"].as_str().unwrap());

    let (status, ack) = app.send_json(request(Method::DELETE, &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({ "acknowledged": true, "deletedCount": 1 }));

    let (_, ack) = app.send_json(request(Method::DELETE, &uri, None)).await;
    assert_eq!(ack["deletedCount"], 0);

    // The counter is not decremented by deletion
    assert_eq!(app.get_job(&job_id).await["applicationCount"], 1);
}
