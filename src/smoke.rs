//! Login smoke client
//!
//! Issues fixed requests against a running instance and checks the login
//! contract: a valid login, a short password and a missing field.

use std::time::Duration;

use anyhow::{bail, ensure, Context, Result};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const TEST_USERNAME: &str = "test@example.com";

/// Result of one smoke check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckOutcome {
    fn from_result(name: &'static str, result: Result<String>) -> Self {
        match result {
            Ok(detail) => Self {
                name,
                passed: true,
                detail,
            },
            Err(e) => Self {
                name,
                passed: false,
                detail: format!("{e:#}"),
            },
        }
    }
}

pub struct LoginSmokeClient {
    http: reqwest::Client,
    base_url: String,
}

impl LoginSmokeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_login(&self, form: &[(&str, &str)]) -> Result<(StatusCode, Value)> {
        let response = self
            .http
            .post(self.url("/api/v1/auth/login"))
            .form(form)
            .send()
            .await
            .context("Login request failed")?;

        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .context("Login response is not JSON")?;
        debug!(status = %status, body = %body, "Login response");

        Ok((status, body))
    }

    async fn health(&self) -> Result<String> {
        let response = self
            .http
            .get(self.url("/api/v1/health"))
            .send()
            .await
            .context("Could not connect to the server")?;

        ensure!(
            response.status().is_success(),
            "Health check returned {}",
            response.status()
        );
        let body: Value = response.json().await.context("Health response is not JSON")?;
        ensure!(body["status"] == "healthy", "Unexpected health body: {body}");

        Ok(format!("Server is running: {body}"))
    }

    async fn valid_login(&self) -> Result<String> {
        let (status, body) = self
            .post_login(&[("username", TEST_USERNAME), ("password", "password123")])
            .await?;

        ensure!(status == StatusCode::OK, "Expected 200, got {status}");
        match body.get("access_token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => {}
            _ => bail!("Missing access_token"),
        }
        ensure!(body.get("user").is_some(), "Missing user object");
        ensure!(
            body["user"]["email"] == TEST_USERNAME,
            "Email mismatch: {}",
            body["user"]["email"]
        );

        Ok(format!("Logged in as {}", body["user"]["name"]))
    }

    async fn short_password(&self) -> Result<String> {
        let (status, _) = self
            .post_login(&[("username", TEST_USERNAME), ("password", "12")])
            .await?;

        ensure!(
            status == StatusCode::UNAUTHORIZED,
            "Expected 401, got {status}"
        );
        Ok("Expected 401 error received".to_string())
    }

    async fn missing_password(&self) -> Result<String> {
        let (status, _) = self.post_login(&[("username", TEST_USERNAME)]).await?;

        ensure!(
            status == StatusCode::UNPROCESSABLE_ENTITY,
            "Expected 422, got {status}"
        );
        Ok("Expected 422 validation error received".to_string())
    }

    pub async fn check_health(&self) -> CheckOutcome {
        CheckOutcome::from_result("health", self.health().await)
    }

    pub async fn check_valid_login(&self) -> CheckOutcome {
        CheckOutcome::from_result("login_success", self.valid_login().await)
    }

    pub async fn check_short_password(&self) -> CheckOutcome {
        CheckOutcome::from_result("login_short_password", self.short_password().await)
    }

    pub async fn check_missing_password(&self) -> CheckOutcome {
        CheckOutcome::from_result("login_missing_password", self.missing_password().await)
    }

    /// Run every check; login checks are skipped when the server is down
    pub async fn run_all(&self) -> Vec<CheckOutcome> {
        let health = self.check_health().await;
        if !health.passed {
            return vec![health];
        }

        vec![
            health,
            self.check_valid_login().await,
            self.check_short_password().await,
            self.check_missing_password().await,
        ]
    }
}
