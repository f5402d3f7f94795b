//! Login smoke client tests

use codebenders_mock::smoke::LoginSmokeClient;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::common::spawn_live_server;

async fn healthy_mock() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "healthy", "service": "codebenders-api"})),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_run_all_passes_against_live_server() {
    let base_url = spawn_live_server().await;
    let client = LoginSmokeClient::new(base_url).unwrap();

    let outcomes = client.run_all().await;

    let names: Vec<&str> = outcomes.iter().map(|o| o.name).collect();
    assert_eq!(
        names,
        vec![
            "health",
            "login_success",
            "login_short_password",
            "login_missing_password"
        ]
    );
    for outcome in &outcomes {
        assert!(outcome.passed, "{} failed: {}", outcome.name, outcome.detail);
    }
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let base_url = spawn_live_server().await;
    let client = LoginSmokeClient::new(format!("{base_url}/")).unwrap();

    assert!(client.check_health().await.passed);
}

#[tokio::test]
async fn test_missing_access_token_fails_login_check() {
    let server = healthy_mock().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "bearer",
            "user": {"id": "user_1", "email": "test@example.com", "name": "Test"}
        })))
        .mount(&server)
        .await;

    let client = LoginSmokeClient::new(server.uri()).unwrap();
    let outcome = client.check_valid_login().await;

    assert!(!outcome.passed);
    assert!(outcome.detail.contains("Missing access_token"));
}

#[tokio::test]
async fn test_unexpected_status_fails_short_password_check() {
    let server = healthy_mock().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "x"})))
        .mount(&server)
        .await;

    let client = LoginSmokeClient::new(server.uri()).unwrap();
    let outcome = client.check_short_password().await;

    assert!(!outcome.passed);
    assert!(outcome.detail.contains("Expected 401"));
}

#[tokio::test]
async fn test_unhealthy_server_skips_login_checks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = LoginSmokeClient::new(server.uri()).unwrap();
    let outcomes = client.run_all().await;

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].name, "health");
    assert!(!outcomes[0].passed);
}
