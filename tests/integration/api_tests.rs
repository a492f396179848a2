//! HTTP API integration tests driving the real router

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use course_registry::api::routes::create_router;
use course_registry::config::Settings;
use course_registry::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.api.reset_enabled = true;
    settings.api.docs_enabled = false;
    settings
}

fn create_test_app() -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(create_test_settings()));
    let router = create_router(state.clone());
    (state, router)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_create_course_then_duplicate_name_conflicts() {
    let (_, app) = create_test_app();

    let (status, body) = send(&app, Method::POST, "/courses", Some(json!({"name": "JS", "hours": 40}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "JS", "hours": 40}));

    let (status, body) = send(&app, Method::POST, "/courses", Some(json!({"name": "js", "hours": 10}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "A course with this name already exists.");
}

#[tokio::test]
async fn test_create_course_validation() {
    let (_, app) = create_test_app();

    for payload in [
        json!({"hours": 40}),
        json!({"name": "JS"}),
        json!({"name": "JS", "hours": "forty"}),
    ] {
        let (status, body) = send(&app, Method::POST, "/courses", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Name and hours (number) are required.");
    }
}

#[tokio::test]
async fn test_list_and_get_courses() {
    let (_, app) = create_test_app();
    send(&app, Method::POST, "/courses", Some(json!({"name": "Rust", "hours": 40}))).await;
    send(&app, Method::POST, "/courses", Some(json!({"name": "Go", "hours": 30}))).await;

    let (status, body) = send(&app, Method::GET, "/courses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Registered courses.");
    assert_eq!(body["courses"].as_array().unwrap().len(), 2);
    assert_eq!(body["courses"][0]["name"], "Rust");
    assert_eq!(body["courses"][1]["name"], "Go");

    let (status, body) = send(&app, Method::GET, "/courses/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Go");

    let (status, body) = send(&app, Method::GET, "/courses/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Course not found.");

    let (status, _) = send(&app, Method::GET, "/courses/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Ids are read from the leading digits of the segment
    for uri in ["/courses/2abc", "/courses/2.5"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Go");
    }
}

#[tokio::test]
async fn test_update_course() {
    let (_, app) = create_test_app();
    send(&app, Method::POST, "/courses", Some(json!({"name": "JavaScript", "hours": 40}))).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/courses/1",
        Some(json!({"name": "Node.js", "hours": 60})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Node.js", "hours": 60}));

    let (status, _) = send(&app, Method::PUT, "/courses/1", Some(json!({"name": "Node.js"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_id_is_reported_before_body_errors() {
    let (_, app) = create_test_app();

    let (status, _) = send(&app, Method::PUT, "/courses/42", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PUT, "/students/42", Some(json!({"name": ""}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Malformed JSON still yields 404 for an absent record
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/courses/42")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (_, app) = create_test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/students")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_course() {
    let (_, app) = create_test_app();
    send(&app, Method::POST, "/courses", Some(json!({"name": "JavaScript", "hours": 40}))).await;

    let (status, body) = send(&app, Method::DELETE, "/courses/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Course deleted successfully.");

    let (_, body) = send(&app, Method::GET, "/courses", None).await;
    assert!(body["courses"].as_array().unwrap().is_empty());

    let (status, _) = send(&app, Method::DELETE, "/courses/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_student_crud() {
    let (_, app) = create_test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/students",
        Some(json!({"name": "Ann", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Ann", "email": "a@x.com", "enrolledCourseIds": []})
    );

    let (status, body) = send(&app, Method::POST, "/students", Some(json!({"name": "Bob"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name and email are required.");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/students/1",
        Some(json!({"name": "Ann Lee", "email": "ann@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ann Lee");
    assert_eq!(body["email"], "ann@x.com");

    for payload in [
        json!({"name": "Ann Lee", "email": ""}),
        json!({"name": "Ann Lee"}),
    ] {
        let (status, body) = send(&app, Method::PUT, "/students/1", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Name and email are required.");
    }

    let (status, body) = send(&app, Method::GET, "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Registered students.");
    assert_eq!(body["students"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ann Lee");

    let (status, body) = send(&app, Method::DELETE, "/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student deleted successfully.");

    let (status, body) = send(&app, Method::GET, "/students/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Student not found.");
}

#[tokio::test]
async fn test_health_reports_counts() {
    let (_, app) = create_test_app();
    send(&app, Method::POST, "/courses", Some(json!({"name": "Rust", "hours": 40}))).await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["courses"], 1);
    assert_eq!(body["students"], 0);
}

#[tokio::test]
async fn test_reset_endpoint_restores_initial_state() {
    let (state, app) = create_test_app();
    send(&app, Method::POST, "/courses", Some(json!({"name": "Rust", "hours": 40}))).await;
    send(&app, Method::POST, "/students", Some(json!({"name": "Ann", "email": "a@x.com"}))).await;

    let (status, _) = send(&app, Method::POST, "/admin/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.store.counts().courses, 0);

    let (_, body) = send(&app, Method::POST, "/courses", Some(json!({"name": "Rust", "hours": 40}))).await;
    assert_eq!(body["id"], 1);
    let (_, body) = send(&app, Method::POST, "/students", Some(json!({"name": "Ann", "email": "a@x.com"}))).await;
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_reset_route_absent_unless_enabled() {
    let state = Arc::new(AppState::new(Settings::default()));
    let app = create_router(state);

    let (status, _) = send(&app, Method::POST, "/admin/reset", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let state = Arc::new(AppState::new(Settings::default()));
    let app = create_router(state);

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/courses"].is_object());
    assert!(body["paths"]["/students/{id}/enroll"].is_object());
}
