//! PRD upload endpoint
//!
//! The text is measured and keyword-scanned, never understood. The extracted
//! sections and next steps are the same for every document.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    extract::{ApiJson, BearerToken},
    logging::RequestLog,
    routes::timestamp,
    AppState,
};

/// Documents with more words than this are rated "medium"
pub const MEDIUM_COMPLEXITY_WORDS: usize = 100;

const PRD_ID: &str = "prd_mock_12345";

const NEXT_STEPS: [&str; 4] = [
    "Review generated user personas",
    "Select target audience",
    "Define brand design",
    "Configure business logic",
];

fn default_source() -> Option<String> {
    Some("textarea".to_string())
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PrdUploadRequest {
    /// Text from the textarea and/or extracted from an uploaded file
    pub text: String,
    /// Origin of the text, e.g. `textarea` or `file: spec.pdf`
    #[serde(default = "default_source")]
    pub source: Option<String>,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
}

/// Keyword flags and complexity estimate
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PrdAnalysis {
    pub contains_features: bool,
    pub contains_requirements: bool,
    pub contains_goals: bool,
    pub estimated_complexity: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExtractedSections {
    pub overview: String,
    pub target_users: Vec<String>,
    pub key_features: Vec<String>,
    pub technical_requirements: Vec<String>,
}

impl ExtractedSections {
    fn canned() -> Self {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            overview: "Mock project overview extracted from PRD".to_string(),
            target_users: owned(&["User type 1", "User type 2"]),
            key_features: owned(&[
                "Feature 1 from PRD",
                "Feature 2 from PRD",
                "Feature 3 from PRD",
            ]),
            technical_requirements: owned(&["Backend API", "Database", "Frontend UI"]),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PrdUploadData {
    pub prd_id: String,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    pub text_length: usize,
    pub word_count: usize,
    pub source: Option<String>,
    pub analysis: PrdAnalysis,
    pub extracted_sections: ExtractedSections,
    pub next_steps: Vec<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PrdUploadResponse {
    pub success: bool,
    pub message: String,
    pub data: PrdUploadData,
}

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Derive the analysis block from raw text
pub fn analyze(text: &str) -> PrdAnalysis {
    let lower = text.to_lowercase();
    let complexity = if word_count(text) > MEDIUM_COMPLEXITY_WORDS {
        "medium"
    } else {
        "low"
    };

    PrdAnalysis {
        contains_features: lower.contains("feature"),
        contains_requirements: lower.contains("requirement"),
        contains_goals: lower.contains("goal"),
        estimated_complexity: complexity.to_string(),
    }
}

/// Upload a PRD
#[utoipa::path(
    post,
    path = "/api/upload_prd",
    tag = "PRD",
    request_body = PrdUploadRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "PRD processed", body = PrdUploadResponse),
        (status = 400, description = "Empty PRD text", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse)
    )
)]
pub async fn upload_prd(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    ApiJson(request): ApiJson<PrdUploadRequest>,
) -> AppResult<Json<PrdUploadResponse>> {
    let text_length = request.text.chars().count();

    state.observer.observe(
        &RequestLog::new("upload_prd")
            .with_token(token.as_deref())
            .with_scope(request.user_id.as_deref(), request.project_id.as_deref())
            .field("source", request.source.as_deref().unwrap_or("None"))
            .field("text_length", text_length),
    );

    if request.text.trim().is_empty() {
        return Err(AppError::invalid_input("PRD text cannot be empty"));
    }

    let data = PrdUploadData {
        prd_id: PRD_ID.to_string(),
        text_length,
        word_count: word_count(&request.text),
        analysis: analyze(&request.text),
        extracted_sections: ExtractedSections::canned(),
        next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        timestamp: timestamp(),
        user_id: request.user_id,
        project_id: request.project_id,
        source: request.source,
    };

    Ok(Json(PrdUploadResponse {
        success: true,
        message: "PRD processed successfully".to_string(),
        data,
    }))
}
