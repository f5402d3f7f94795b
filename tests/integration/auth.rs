//! Login endpoint tests
//!
//! POST /api/v1/auth/login takes `username` and `password` as form fields.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::test_app;

#[tokio::test]
async fn test_login_success_shape() {
    let app = test_app();

    let response = app
        .server
        .post("/api/v1/auth/login")
        .form(&[("username", "test@example.com"), ("password", "password123")])
        .await;

    response.assert_status_ok();
    let json: Value = response.json();

    assert_eq!(json["token_type"], "bearer");
    let token = json["access_token"].as_str().unwrap();
    assert!(token.starts_with("mock_jwt_"));
    assert!(token.len() > "mock_jwt_".len());

    let user = &json["user"];
    assert_eq!(user["email"], "test@example.com");
    assert_eq!(user["name"], "Test");
    assert_eq!(user["is_verified"], true);
    assert!(user["id"].as_str().unwrap().starts_with("user_"));

    let created_at = user["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_login_name_without_at_sign() {
    let app = test_app();

    let response = app
        .server
        .post("/api/v1/auth/login")
        .form(&[("username", "alice"), ("password", "abc")])
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["user"]["email"], "alice");
    assert_eq!(json["user"]["name"], "Alice");
}

#[tokio::test]
async fn test_login_tokens_differ_across_calls() {
    let app = test_app();
    let form = [("username", "test@example.com"), ("password", "password123")];

    let first: Value = app.server.post("/api/v1/auth/login").form(&form).await.json();
    let second: Value = app.server.post("/api/v1/auth/login").form(&form).await.json();

    assert_ne!(first["access_token"], second["access_token"]);
    assert_ne!(first["user"]["id"], second["user"]["id"]);
}

#[tokio::test]
async fn test_login_short_password_is_unauthorized() {
    let app = test_app();

    let response = app
        .server
        .post("/api/v1/auth/login")
        .form(&[("username", "test@example.com"), ("password", "ab")])
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let json: Value = response.json();
    assert_eq!(json["detail"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_empty_fields_are_bad_request() {
    let app = test_app();

    for form in [
        [("username", ""), ("password", "password123")],
        [("username", "test@example.com"), ("password", "")],
    ] {
        let response = app.server.post("/api/v1/auth/login").form(&form).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json: Value = response.json();
        assert_eq!(json["detail"], "Username and password are required");
    }
}

#[tokio::test]
async fn test_login_missing_field_is_rejected_before_validation() {
    let app = test_app();

    let response = app
        .server
        .post("/api/v1/auth/login")
        .form(&[("username", "test@example.com")])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = response.json();
    assert!(json["detail"].as_str().unwrap().contains("password"));
    // Rejected by the extractor, so the handler never logged it
    assert!(app.observer.logs().is_empty());
}

#[tokio::test]
async fn test_login_json_body_is_unprocessable() {
    let app = test_app();

    let response = app
        .server
        .post("/api/v1/auth/login")
        .json(&json!({"username": "test@example.com", "password": "password123"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = response.json();
    assert!(json["detail"].is_string());
    assert!(app.observer.logs().is_empty());
}

#[tokio::test]
async fn test_login_is_logged_without_password() {
    let app = test_app();

    app.server
        .post("/api/v1/auth/login")
        .form(&[("username", "test@example.com"), ("password", "password123")])
        .await
        .assert_status_ok();

    let logs = app.observer.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].endpoint, "login");
    assert_eq!(logs[0].get("username"), Some("test@example.com"));
    assert!(logs[0].fields.iter().all(|(_, v)| v != "password123"));
}
