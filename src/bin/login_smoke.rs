//! Smoke test for the login endpoint of a running mock API
//!
//! Usage: MOCK_API_URL=http://localhost:8000 cargo run --bin login_smoke

use std::process::ExitCode;

use codebenders_mock::smoke::{LoginSmokeClient, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "codebenders_mock=info".into()),
        )
        .init();

    let base_url = std::env::var("MOCK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    println!("Running login checks against {base_url}");

    let client = LoginSmokeClient::new(base_url)?;
    let outcomes = client.run_all().await;

    for outcome in &outcomes {
        let mark = if outcome.passed { "PASS" } else { "FAIL" };
        println!("[{mark}] {}: {}", outcome.name, outcome.detail);
    }

    if outcomes.iter().all(|o| o.passed) {
        println!("All checks passed");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
