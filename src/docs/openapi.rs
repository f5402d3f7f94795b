//! OpenAPI specification for the mock API
//!
//! Aggregates all endpoints and schemas into a single OpenAPI document.

use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    catalog::{
        BrandColors, BrandDesign, KeyRequirement, Persona, Project, ProviderKeyRequirements,
        ProviderOption, ThirdPartyApi,
    },
    error::ErrorResponse,
    routes::{
        auth::{LoginForm, LoginResponse, MockUser},
        brand::{BrandDesignSaved, BrandDesignUploadRequest, BrandDesignUploadResponse},
        health::{HealthResponse, HealthStatus, RootResponse},
        personas::{
            PersonasResponse, PersonasSaved, PersonasUploadResponse, UserPersonasUploadRequest,
        },
        prd::{
            ExtractedSections, PrdAnalysis, PrdUploadData, PrdUploadRequest, PrdUploadResponse,
        },
        projects::ProjectsResponse,
        thirdparty::{
            CatalogSummary, ProviderRecommendation, ProviderUploadRequest,
            ProviderUploadResponse, ProvidersSaved, ThirdPartyCatalog, ThirdPartySaved,
            ThirdPartyUploadRequest, ThirdPartyUploadResponse,
        },
    },
};

/// OpenAPI specification for the CodeBenders mock API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CodeBenders API",
        version = "1.0.0",
        description = "Mock backend for the CodeBenders product-definition workflow. \
                       Persona and brand design lookups are non-deterministic and must not be cached."
    ),
    paths(
        crate::routes::health::root,
        crate::routes::health::health_check,
        crate::routes::auth::login,
        crate::routes::projects::list_projects,
        crate::routes::prd::upload_prd,
        crate::routes::personas::get_userpersonas,
        crate::routes::personas::upload_userpersonas,
        crate::routes::brand::get_branddesign,
        crate::routes::brand::upload_branddesign,
        crate::routes::thirdparty::get_thirdparty,
        crate::routes::thirdparty::upload_thirdparty,
        crate::routes::thirdparty::upload_thirdprovider,
    ),
    components(
        schemas(
            // Health
            HealthStatus,
            RootResponse,
            HealthResponse,
            // Auth
            LoginForm,
            MockUser,
            LoginResponse,
            // Projects
            Project,
            ProjectsResponse,
            // PRD
            PrdUploadRequest,
            PrdAnalysis,
            ExtractedSections,
            PrdUploadData,
            PrdUploadResponse,
            // Personas
            Persona,
            PersonasResponse,
            UserPersonasUploadRequest,
            PersonasSaved,
            PersonasUploadResponse,
            // Brand
            BrandColors,
            BrandDesign,
            BrandDesignUploadRequest,
            BrandDesignSaved,
            BrandDesignUploadResponse,
            // Third party
            ThirdPartyApi,
            CatalogSummary,
            ThirdPartyCatalog,
            ThirdPartyUploadRequest,
            ProviderOption,
            ProviderRecommendation,
            ThirdPartySaved,
            ThirdPartyUploadResponse,
            ProviderUploadRequest,
            KeyRequirement,
            ProviderKeyRequirements,
            ProvidersSaved,
            ProviderUploadResponse,
            // Error
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service metadata"),
        (name = "Auth", description = "Mock login"),
        (name = "Projects", description = "Project list"),
        (name = "PRD", description = "Product requirements upload"),
        (name = "Personas", description = "User persona generation and selection"),
        (name = "Brand", description = "Brand design"),
        (name = "Third Party", description = "Third-party API and provider selection")
    )
)]
pub struct MockApiDoc;

/// Bearer token header accepted (and ignored) by every workflow endpoint
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
