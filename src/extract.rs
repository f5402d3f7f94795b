//! Request extractors
//!
//! Body extractors that route framework rejections through [`AppError`], the
//! optional bearer token every endpoint accepts, and the identity query pair.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::{header, request::Parts},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::AppError;

/// JSON body whose rejections render as `{"detail": ...}`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Form body whose rejections render as `{"detail": ...}`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct ApiForm<T>(pub T);

/// Optional `Authorization: Bearer` token
///
/// Read for logging only; it is never validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BearerToken(pub Option<String>);

/// Extract the bearer token from an Authorization header value
///
/// A blank token counts as no token.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(extract_bearer_token)
            .map(str::to_string);

        Ok(BearerToken(token))
    }
}

/// Optional user/project identifiers passed as query parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectScope {
    /// ID of the user
    pub user_id: Option<String>,
    /// ID of the project
    pub project_id: Option<String>,
}
