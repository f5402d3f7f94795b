//! User persona endpoints
//!
//! The lookup is non-deterministic: each call draws a branch and returns
//! either the full catalog or an empty list. Responses must not be cached.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    branching::Branch,
    catalog::{Persona, PERSONAS},
    error::{AppError, AppResult, ErrorResponse},
    extract::{ApiJson, BearerToken, ProjectScope},
    logging::RequestLog,
    routes::timestamp,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonasResponse {
    pub success: bool,
    pub personas: Vec<Persona>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserPersonasUploadRequest {
    /// Persona objects picked by the user, echoed back as-is
    #[schema(value_type = Vec<Object>)]
    pub selected_personas: Vec<Value>,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonasSaved {
    #[schema(value_type = Vec<Object>)]
    pub personas_saved: Vec<Value>,
    pub count: usize,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    pub saved_at: String,
    pub next_step: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonasUploadResponse {
    pub success: bool,
    pub message: String,
    pub data: PersonasSaved,
}

/// Get user personas
///
/// Returns the four canned personas or an empty list, chosen per call.
#[utoipa::path(
    get,
    path = "/api/get_userpersonas",
    tag = "Personas",
    params(ProjectScope),
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Personas, possibly empty", body = PersonasResponse))
)]
pub async fn get_userpersonas(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Query(scope): Query<ProjectScope>,
) -> Json<PersonasResponse> {
    let has_personas = state.branches.has_data(Branch::Personas);

    state.observer.observe(
        &RequestLog::new("get_userpersonas")
            .with_token(token.as_deref())
            .with_scope(scope.user_id.as_deref(), scope.project_id.as_deref())
            .field("has_personas", has_personas),
    );

    let response = if has_personas {
        PersonasResponse {
            success: true,
            personas: PERSONAS.to_vec(),
            message: "User personas retrieved successfully".to_string(),
        }
    } else {
        PersonasResponse {
            success: true,
            personas: Vec::new(),
            message: "No user personas found".to_string(),
        }
    };

    Json(response)
}

/// Name of each selected persona, for the log
fn persona_names(personas: &[Value]) -> String {
    personas
        .iter()
        .map(|p| p.get("name").and_then(Value::as_str).unwrap_or("Unknown"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Save the selected personas
#[utoipa::path(
    post,
    path = "/api/upload_userpersonas",
    tag = "Personas",
    request_body = UserPersonasUploadRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Personas saved", body = PersonasUploadResponse),
        (status = 400, description = "No persona selected", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse)
    )
)]
pub async fn upload_userpersonas(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    ApiJson(request): ApiJson<UserPersonasUploadRequest>,
) -> AppResult<Json<PersonasUploadResponse>> {
    state.observer.observe(
        &RequestLog::new("upload_userpersonas")
            .with_token(token.as_deref())
            .with_scope(request.user_id.as_deref(), request.project_id.as_deref())
            .field("count", request.selected_personas.len())
            .field("personas", persona_names(&request.selected_personas)),
    );

    if request.selected_personas.is_empty() {
        return Err(AppError::invalid_input("At least one persona must be selected"));
    }

    let count = request.selected_personas.len();

    Ok(Json(PersonasUploadResponse {
        success: true,
        message: format!("Successfully saved {count} user persona(s)"),
        data: PersonasSaved {
            personas_saved: request.selected_personas,
            count,
            user_id: request.user_id,
            project_id: request.project_id,
            saved_at: timestamp(),
            next_step: "brand_design".to_string(),
        },
    }))
}
