//! Mock login endpoint
//!
//! No credential store is consulted. Any non-empty username with a password
//! of at least three characters logs in and receives a fresh opaque token.

use std::sync::Arc;

use axum::{extract::State, Json};
use rand::{rng, RngCore};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    extract::ApiForm,
    logging::RequestLog,
    routes::timestamp,
    AppState,
};

/// Shortest password the mock accepts
pub const MIN_PASSWORD_LEN: usize = 3;

/// Login form (`application/x-www-form-urlencoded`)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginForm {
    /// User's email address
    pub username: String,
    pub password: String,
}

/// User record synthesized at login time
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MockUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_verified: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: MockUser,
}

/// Hex-encode `len` random bytes
fn random_hex(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Capitalize the way the frontend expects: first letter upper, rest lower
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Display name derived from the email local-part
pub fn display_name(username: &str) -> String {
    let local = username
        .split_once('@')
        .map_or(username, |(local, _)| local);
    capitalize(local)
}

/// Mock login
///
/// Returns a bearer-style token and a user derived from the username.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Username or password empty", body = ErrorResponse),
        (status = 401, description = "Password too short", body = ErrorResponse),
        (status = 422, description = "Missing form field", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiForm(form): ApiForm<LoginForm>,
) -> AppResult<Json<LoginResponse>> {
    state
        .observer
        .observe(&RequestLog::new("login").field("username", &form.username));

    if form.username.is_empty() || form.password.is_empty() {
        return Err(AppError::invalid_input("Username and password are required"));
    }

    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::InvalidCredentials);
    }

    let user = MockUser {
        id: format!("user_{}", random_hex(8)),
        name: display_name(&form.username),
        email: form.username,
        is_verified: true,
        created_at: timestamp(),
    };

    Ok(Json(LoginResponse {
        access_token: format!("mock_jwt_{}", random_hex(32)),
        token_type: "bearer".to_string(),
        user,
    }))
}
