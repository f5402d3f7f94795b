//! HTTP routes for the mock API
//!
//! This module defines all HTTP endpoints exposed by the service.

pub mod auth;
pub mod brand;
pub mod docs;
pub mod health;
pub mod metrics;
pub mod personas;
pub mod prd;
pub mod projects;
pub mod thirdparty;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{middleware::tracking::track_requests, AppState};

/// Current time as an RFC 3339 string
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// CORS for the configured frontend origins, with credentials
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    // Wildcards are not allowed alongside credentials, so mirror instead
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/", get(health::root))
        .route("/api/v1/health", get(health::health_check))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/projects", get(projects::list_projects))
        .route("/api/upload_prd", post(prd::upload_prd))
        .route("/api/get_userpersonas", get(personas::get_userpersonas))
        .route("/api/upload_userpersonas", post(personas::upload_userpersonas))
        .route("/api/get_branddesign", get(brand::get_branddesign))
        .route("/api/upload_branddesign", post(brand::upload_branddesign))
        .route("/api/get_thirdparty", get(thirdparty::get_thirdparty))
        .route("/api/upload_thirdparty", post(thirdparty::upload_thirdparty))
        .route("/api/upload_thirdprovider", post(thirdparty::upload_thirdprovider))
        .route_layer(middleware::from_fn(track_requests));

    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .merge(api_routes)
        .route("/metrics", get(metrics::prometheus_metrics))
        .merge(docs::create_docs_router())
        // Global middleware (applied to all routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
