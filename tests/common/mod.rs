//! Common test utilities for the mock API
//!
//! Shared fixtures for building the router with pinned collaborators.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue};
use axum_test::TestServer;
use codebenders_mock::{
    branching::{BranchSource, FixedBranches, RandomBranches},
    logging::RecordingObserver,
    routes::create_router,
    AppState, Config,
};

/// Test configuration constants
pub mod constants {
    /// Bearer token sent by the frontend after login
    pub const TEST_TOKEN: &str = "mock_jwt_0123456789abcdefghijklmnop";
    /// Token prefix expected in logs
    pub const TEST_TOKEN_PREFIX: &str = "mock_jwt_0123456789a...";
    pub const TEST_USER_ID: &str = "user_123";
    pub const TEST_PROJECT_ID: &str = "proj_1";
}

/// A test server together with the observer it logs into
pub struct TestApp {
    pub server: TestServer,
    pub observer: Arc<RecordingObserver>,
}

/// Build a test app around an explicit branch source
pub fn test_app_with(branches: Arc<dyn BranchSource>) -> TestApp {
    let observer = Arc::new(RecordingObserver::new());
    let state = AppState::with_parts(Config::default(), branches, observer.clone());
    let server =
        TestServer::new(create_router(Arc::new(state))).expect("Failed to create test server");

    TestApp { server, observer }
}

/// Test app whose randomized endpoints always return data
pub fn test_app() -> TestApp {
    test_app_with(Arc::new(FixedBranches(true)))
}

/// Test app whose randomized endpoints always return the empty branch
pub fn empty_test_app() -> TestApp {
    test_app_with(Arc::new(FixedBranches(false)))
}

/// Test app with the production coin flip
pub fn random_test_app() -> TestApp {
    test_app_with(Arc::new(RandomBranches))
}

/// Authorization header carrying the test token
pub fn bearer() -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", constants::TEST_TOKEN))
            .expect("valid header value"),
    )
}

/// Serve the real router on an ephemeral port and return its base URL
pub async fn spawn_live_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let state = AppState::new(Config::default());
    let app = create_router(Arc::new(state));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{addr}")
}
