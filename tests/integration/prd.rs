//! PRD upload endpoint tests

use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{bearer, constants, test_app};

fn words(n: usize) -> String {
    (0..n).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ")
}

#[tokio::test]
async fn test_upload_prd_success_shape() {
    let app = test_app();
    let text = "This PRD lists every Feature, each Requirement and our goals.";

    let response = app
        .server
        .post("/api/upload_prd")
        .json(&json!({
            "text": text,
            "source": "file: spec.pdf",
            "user_id": constants::TEST_USER_ID,
            "project_id": constants::TEST_PROJECT_ID
        }))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "PRD processed successfully");

    let data = &json["data"];
    assert_eq!(data["prd_id"], "prd_mock_12345");
    assert_eq!(data["user_id"], constants::TEST_USER_ID);
    assert_eq!(data["project_id"], constants::TEST_PROJECT_ID);
    assert_eq!(data["source"], "file: spec.pdf");
    assert_eq!(data["text_length"], text.chars().count());
    assert_eq!(data["word_count"], 10);
    assert_eq!(
        data["analysis"],
        json!({
            "contains_features": true,
            "contains_requirements": true,
            "contains_goals": true,
            "estimated_complexity": "low"
        })
    );
    assert_eq!(data["extracted_sections"]["key_features"].as_array().unwrap().len(), 3);
    assert_eq!(data["next_steps"].as_array().unwrap().len(), 4);
    assert!(data["timestamp"].is_string());
}

#[tokio::test]
async fn test_upload_prd_defaults() {
    let app = test_app();

    let response = app
        .server
        .post("/api/upload_prd")
        .json(&json!({"text": "plain text"}))
        .await;

    response.assert_status_ok();
    let data = &response.json::<Value>()["data"];
    assert_eq!(data["source"], "textarea");
    assert!(data["user_id"].is_null());
    assert!(data["project_id"].is_null());
    assert_eq!(data["analysis"]["contains_features"], false);
}

#[tokio::test]
async fn test_upload_prd_empty_text_is_bad_request() {
    let app = test_app();

    for text in ["", "   ", "\n\t "] {
        let response = app
            .server
            .post("/api/upload_prd")
            .json(&json!({"text": text}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json: Value = response.json();
        assert_eq!(json["detail"], "PRD text cannot be empty");
    }
}

#[tokio::test]
async fn test_upload_prd_complexity_boundary() {
    let app = test_app();

    let low: Value = app
        .server
        .post("/api/upload_prd")
        .json(&json!({"text": words(100)}))
        .await
        .json();
    let medium: Value = app
        .server
        .post("/api/upload_prd")
        .json(&json!({"text": words(101)}))
        .await
        .json();

    assert_eq!(low["data"]["word_count"], 100);
    assert_eq!(low["data"]["analysis"]["estimated_complexity"], "low");
    assert_eq!(medium["data"]["word_count"], 101);
    assert_eq!(medium["data"]["analysis"]["estimated_complexity"], "medium");
}

#[tokio::test]
async fn test_upload_prd_missing_text_is_unprocessable() {
    let app = test_app();

    let response = app
        .server
        .post("/api/upload_prd")
        .json(&json!({"source": "textarea"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = response.json();
    assert!(json["detail"].as_str().unwrap().contains("text"));
}

#[tokio::test]
async fn test_upload_prd_wrong_type_is_unprocessable() {
    let app = test_app();

    let response = app
        .server
        .post("/api/upload_prd")
        .json(&json!({"text": 42}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_upload_prd_truncated_json_is_unprocessable() {
    let app = test_app();

    let response = app
        .server
        .post("/api/upload_prd")
        .bytes(Bytes::from_static(br#"{"text": "#))
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = response.json();
    assert!(json["detail"].is_string());
    assert!(app.observer.logs().is_empty());
}

#[tokio::test]
async fn test_upload_prd_without_content_type_is_unprocessable() {
    let app = test_app();

    let response = app
        .server
        .post("/api/upload_prd")
        .bytes(Bytes::from_static(br#"{"text": "hello"}"#))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = response.json();
    assert!(json["detail"].as_str().unwrap().contains("Content-Type"));
}

#[tokio::test]
async fn test_upload_prd_logs_token_prefix_only() {
    let app = test_app();
    let (name, value) = bearer();

    app.server
        .post("/api/upload_prd")
        .add_header(name, value)
        .json(&json!({"text": "hello", "user_id": constants::TEST_USER_ID}))
        .await
        .assert_status_ok();

    let logs = app.observer.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].endpoint, "upload_prd");
    assert_eq!(logs[0].token_prefix.as_deref(), Some(constants::TEST_TOKEN_PREFIX));
    assert_eq!(logs[0].user_id.as_deref(), Some(constants::TEST_USER_ID));
    assert_eq!(logs[0].get("text_length"), Some("5"));
}

#[tokio::test]
async fn test_upload_prd_blank_bearer_logs_no_token() {
    let app = test_app();

    app.server
        .post("/api/upload_prd")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Bearer "))
        .json(&json!({"text": "hello"}))
        .await
        .assert_status_ok();

    let logs = app.observer.logs();
    assert_eq!(logs[0].token_prefix, None);
}
