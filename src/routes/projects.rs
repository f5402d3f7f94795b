//! Projects endpoint

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::{Project, PROJECTS};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectsResponse {
    pub success: bool,
    pub projects: Vec<Project>,
}

/// List projects
///
/// Always the same two projects, regardless of caller.
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "Projects",
    responses((status = 200, description = "Project list", body = ProjectsResponse))
)]
pub async fn list_projects() -> Json<ProjectsResponse> {
    Json(ProjectsResponse {
        success: true,
        projects: PROJECTS.to_vec(),
    })
}
