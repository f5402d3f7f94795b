//! Third-party API and provider selection endpoints
//!
//! Three steps: list the API categories, turn selected categories into
//! provider recommendations, and turn chosen providers into the credential
//! fields the user has to fill in.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    catalog::{
        key_requirements_for, providers_for_category, ProviderKeyRequirements, ProviderOption,
        ThirdPartyApi, THIRD_PARTY_APIS,
    },
    error::{AppError, AppResult, ErrorResponse},
    extract::{ApiJson, BearerToken, ProjectScope},
    logging::RequestLog,
    routes::timestamp,
    AppState,
};

const PRD_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogSummary {
    pub total: usize,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ThirdPartyCatalog {
    pub apis: Vec<ThirdPartyApi>,
    pub summary: CatalogSummary,
    pub analyzed_at: String,
    pub prd_version: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ThirdPartyUploadRequest {
    /// Catalog entries picked by the user; only `category` is interpreted
    #[schema(value_type = Vec<Object>)]
    pub selected_apis: Vec<Value>,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
}

/// Providers offered for one selected API category
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProviderRecommendation {
    /// Display name of the selected API
    pub api_category: String,
    pub category: String,
    pub description: String,
    pub providers: Vec<ProviderOption>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ThirdPartySaved {
    #[schema(value_type = Vec<Object>)]
    pub apis_saved: Vec<Value>,
    pub provider_recommendations: Vec<ProviderRecommendation>,
    pub count: usize,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    pub saved_at: String,
    pub next_step: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ThirdPartyUploadResponse {
    pub success: bool,
    pub message: String,
    pub data: ThirdPartySaved,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProviderUploadRequest {
    /// Chosen provider name per category, kept in the order sent
    #[schema(value_type = Object)]
    pub selected_providers: IndexMap<String, String>,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProvidersSaved {
    #[schema(value_type = Object)]
    pub providers_saved: IndexMap<String, String>,
    pub api_key_requirements: Vec<ProviderKeyRequirements>,
    pub count: usize,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    pub saved_at: String,
    pub next_step: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderUploadResponse {
    pub success: bool,
    pub message: String,
    pub data: ProvidersSaved,
}

/// Get third-party API requirements
///
/// Always the full seven-category catalog.
#[utoipa::path(
    get,
    path = "/api/get_thirdparty",
    tag = "Third Party",
    params(ProjectScope),
    security(("bearer_auth" = [])),
    responses((status = 200, description = "API catalog", body = ThirdPartyCatalog))
)]
pub async fn get_thirdparty(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Query(scope): Query<ProjectScope>,
) -> Json<ThirdPartyCatalog> {
    state.observer.observe(
        &RequestLog::new("get_thirdparty")
            .with_token(token.as_deref())
            .with_scope(scope.user_id.as_deref(), scope.project_id.as_deref()),
    );

    Json(ThirdPartyCatalog {
        apis: THIRD_PARTY_APIS.to_vec(),
        summary: CatalogSummary {
            total: THIRD_PARTY_APIS.len(),
            categories: THIRD_PARTY_APIS
                .iter()
                .map(|api| api.category.to_string())
                .collect(),
        },
        analyzed_at: timestamp(),
        prd_version: PRD_VERSION.to_string(),
    })
}

fn str_field<'a>(entry: &'a Value, name: &str) -> Option<&'a str> {
    entry.get(name).and_then(Value::as_str)
}

/// Recommendation block for a selected entry, if its category is known
pub fn recommend(entry: &Value) -> Option<ProviderRecommendation> {
    let category = str_field(entry, "category")?;
    let providers = providers_for_category(category)?;

    Some(ProviderRecommendation {
        api_category: str_field(entry, "name").unwrap_or(category).to_string(),
        category: category.to_ascii_lowercase(),
        description: str_field(entry, "description").unwrap_or_default().to_string(),
        providers: providers.to_vec(),
    })
}

/// Save selected third-party APIs
///
/// Entries whose category has no recommendations are saved but produce no
/// recommendation block.
#[utoipa::path(
    post,
    path = "/api/upload_thirdparty",
    tag = "Third Party",
    request_body = ThirdPartyUploadRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "APIs saved", body = ThirdPartyUploadResponse),
        (status = 400, description = "No API selected", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse)
    )
)]
pub async fn upload_thirdparty(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    ApiJson(request): ApiJson<ThirdPartyUploadRequest>,
) -> AppResult<Json<ThirdPartyUploadResponse>> {
    let categories: Vec<&str> = request
        .selected_apis
        .iter()
        .map(|entry| str_field(entry, "category").unwrap_or("unknown"))
        .collect();

    state.observer.observe(
        &RequestLog::new("upload_thirdparty")
            .with_token(token.as_deref())
            .with_scope(request.user_id.as_deref(), request.project_id.as_deref())
            .field("count", request.selected_apis.len())
            .field("categories", categories.join(", ")),
    );

    if request.selected_apis.is_empty() {
        return Err(AppError::invalid_input(
            "At least one third-party API must be selected",
        ));
    }

    let provider_recommendations = request.selected_apis.iter().filter_map(recommend).collect();
    let count = request.selected_apis.len();

    Ok(Json(ThirdPartyUploadResponse {
        success: true,
        message: format!("Successfully saved {count} third-party API(s)"),
        data: ThirdPartySaved {
            apis_saved: request.selected_apis,
            provider_recommendations,
            count,
            user_id: request.user_id,
            project_id: request.project_id,
            saved_at: timestamp(),
            next_step: "select_providers".to_string(),
        },
    }))
}

/// Save chosen providers
///
/// Answers with the credential fields each chosen provider needs.
#[utoipa::path(
    post,
    path = "/api/upload_thirdprovider",
    tag = "Third Party",
    request_body = ProviderUploadRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Providers saved", body = ProviderUploadResponse),
        (status = 400, description = "No provider selected", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse)
    )
)]
pub async fn upload_thirdprovider(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    ApiJson(request): ApiJson<ProviderUploadRequest>,
) -> AppResult<Json<ProviderUploadResponse>> {
    let selection = request
        .selected_providers
        .iter()
        .map(|(category, provider)| format!("{category}={provider}"))
        .collect::<Vec<_>>()
        .join(", ");

    state.observer.observe(
        &RequestLog::new("upload_thirdprovider")
            .with_token(token.as_deref())
            .with_scope(request.user_id.as_deref(), request.project_id.as_deref())
            .field("count", request.selected_providers.len())
            .field("providers", selection),
    );

    if request.selected_providers.is_empty() {
        return Err(AppError::invalid_input("At least one provider must be selected"));
    }

    let api_key_requirements = request
        .selected_providers
        .iter()
        .map(|(category, provider)| key_requirements_for(category, provider))
        .collect();
    let count = request.selected_providers.len();

    Ok(Json(ProviderUploadResponse {
        success: true,
        message: format!("Successfully saved {count} provider(s)"),
        data: ProvidersSaved {
            providers_saved: request.selected_providers,
            api_key_requirements,
            count,
            user_id: request.user_id,
            project_id: request.project_id,
            saved_at: timestamp(),
            next_step: "api_keys".to_string(),
        },
    }))
}
