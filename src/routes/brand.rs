//! Brand design endpoints
//!
//! The lookup returns the example design or `{}`; an empty object tells the
//! frontend to fall back to its own defaults. Non-deterministic per call.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{
    branching::Branch,
    catalog::{BrandDesign, EXAMPLE_BRAND_DESIGN},
    error::{AppError, AppResult, ErrorResponse},
    extract::{ApiJson, BearerToken, ProjectScope},
    logging::RequestLog,
    routes::timestamp,
    AppState,
};

/// The example design stamped with the lookup time
#[derive(Debug, Serialize)]
pub struct SavedBrandDesign {
    #[serde(flatten)]
    pub design: BrandDesign,
    pub timestamp: String,
}

/// Serializes as `{}`
#[derive(Debug, Default, Serialize)]
pub struct NoBrandDesign {}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BrandDesignLookup {
    Saved(SavedBrandDesign),
    Missing(NoBrandDesign),
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandDesignUploadRequest {
    pub brand_name: String,
    /// Logo URL or base64 data
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Named colors (primary, secondary, accent, background, foreground)
    #[schema(value_type = Object)]
    pub colors: Map<String, Value>,
    pub font_family: String,
    pub brand_voice: String,
    pub tone: String,
    #[serde(rename = "user_id")]
    pub user_id: Option<String>,
    #[serde(rename = "project_id")]
    pub project_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandDesignSaved {
    pub brand_name: String,
    pub logo_url: Option<String>,
    #[schema(value_type = Object)]
    pub colors: Map<String, Value>,
    pub font_family: String,
    pub brand_voice: String,
    pub tone: String,
    #[serde(rename = "user_id")]
    pub user_id: Option<String>,
    #[serde(rename = "project_id")]
    pub project_id: Option<String>,
    #[serde(rename = "saved_at")]
    pub saved_at: String,
    #[serde(rename = "next_step")]
    pub next_step: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BrandDesignUploadResponse {
    pub success: bool,
    pub message: String,
    pub data: BrandDesignSaved,
}

/// Get brand design
///
/// Returns the saved design, or an empty object when none exists.
#[utoipa::path(
    get,
    path = "/api/get_branddesign",
    tag = "Brand",
    params(ProjectScope),
    security(("bearer_auth" = [])),
    responses((
        status = 200,
        description = "Saved brand design plus `timestamp`, or `{}` to use defaults",
        body = BrandDesign
    ))
)]
pub async fn get_branddesign(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Query(scope): Query<ProjectScope>,
) -> Json<BrandDesignLookup> {
    let has_brand_design = state.branches.has_data(Branch::BrandDesign);

    state.observer.observe(
        &RequestLog::new("get_branddesign")
            .with_token(token.as_deref())
            .with_scope(scope.user_id.as_deref(), scope.project_id.as_deref())
            .field("has_brand_design", has_brand_design),
    );

    if has_brand_design {
        Json(BrandDesignLookup::Saved(SavedBrandDesign {
            design: EXAMPLE_BRAND_DESIGN,
            timestamp: timestamp(),
        }))
    } else {
        Json(BrandDesignLookup::Missing(NoBrandDesign {}))
    }
}

/// Save a brand design
#[utoipa::path(
    post,
    path = "/api/upload_branddesign",
    tag = "Brand",
    request_body = BrandDesignUploadRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Brand design saved", body = BrandDesignUploadResponse),
        (status = 400, description = "Brand name or colors missing", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse)
    )
)]
pub async fn upload_branddesign(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    ApiJson(request): ApiJson<BrandDesignUploadRequest>,
) -> AppResult<Json<BrandDesignUploadResponse>> {
    state.observer.observe(
        &RequestLog::new("upload_branddesign")
            .with_token(token.as_deref())
            .with_scope(request.user_id.as_deref(), request.project_id.as_deref())
            .field("brand_name", &request.brand_name)
            .field("font_family", &request.font_family)
            .field("brand_voice", &request.brand_voice)
            .field("tone", &request.tone)
            .field("colors", Value::Object(request.colors.clone())),
    );

    if request.brand_name.trim().is_empty() {
        return Err(AppError::invalid_input("Brand name is required"));
    }

    if request.colors.is_empty() {
        return Err(AppError::invalid_input("Brand colors are required"));
    }

    Ok(Json(BrandDesignUploadResponse {
        success: true,
        message: "Brand design saved successfully".to_string(),
        data: BrandDesignSaved {
            brand_name: request.brand_name,
            logo_url: request.logo_url,
            colors: request.colors,
            font_family: request.font_family,
            brand_voice: request.brand_voice,
            tone: request.tone,
            user_id: request.user_id,
            project_id: request.project_id,
            saved_at: timestamp(),
            next_step: "business_logic".to_string(),
        },
    }))
}
