//! User persona catalog

use serde::Serialize;
use utoipa::ToSchema;

/// A canned user-role archetype
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[schema(value_type = Vec<String>)]
    pub goals: &'static [&'static str],
    #[schema(value_type = Vec<String>)]
    pub pain_points: &'static [&'static str],
    #[schema(value_type = Vec<String>)]
    pub key_features: &'static [&'static str],
}

pub const PERSONAS: [Persona; 4] = [
    Persona {
        id: "persona-1",
        name: "System Administrator",
        description: "Manages user accounts, system configurations, and monitors platform health. Requires comprehensive dashboard with admin controls.",
        goals: &["Efficient user management", "System monitoring", "Access control"],
        pain_points: &[
            "Complex configuration processes",
            "Limited visibility into system health",
        ],
        key_features: &[
            "User management dashboard",
            "System analytics",
            "Role-based access control",
        ],
    },
    Persona {
        id: "persona-2",
        name: "Business Analyst",
        description: "Analyzes business data, generates reports, and makes data-driven decisions. Needs intuitive analytics and reporting tools.",
        goals: &["Data visualization", "Report generation", "Trend analysis"],
        pain_points: &[
            "Difficulty in accessing real-time data",
            "Complex reporting interfaces",
        ],
        key_features: &[
            "Interactive dashboards",
            "Custom report builder",
            "Data export capabilities",
        ],
    },
    Persona {
        id: "persona-3",
        name: "End User/Customer",
        description: "Primary user of the application who interacts with core features. Expects simple, intuitive interface with quick task completion.",
        goals: &["Quick task completion", "Easy navigation", "Reliable service"],
        pain_points: &["Complicated workflows", "Slow response times"],
        key_features: &["Streamlined workflows", "Quick actions", "Responsive interface"],
    },
    Persona {
        id: "persona-4",
        name: "Developer/Technical User",
        description: "Integrates systems, manages APIs, and customizes functionality. Requires technical documentation and developer tools.",
        goals: &["API integration", "System customization", "Technical documentation"],
        pain_points: &["Poor API documentation", "Limited customization options"],
        key_features: &["API documentation", "Developer console", "Webhook management"],
    },
];
