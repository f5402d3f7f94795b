//! Fixed project list

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub status: &'static str,
    pub created_at: &'static str,
}

pub const PROJECTS: [Project; 2] = [
    Project {
        id: "proj_1",
        name: "E-commerce Platform",
        status: "in_progress",
        created_at: "2024-10-01T10:00:00Z",
    },
    Project {
        id: "proj_2",
        name: "Social Media App",
        status: "draft",
        created_at: "2024-10-05T15:30:00Z",
    },
];
