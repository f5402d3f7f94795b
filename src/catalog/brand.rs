//! Example brand design

use serde::Serialize;
use utoipa::ToSchema;

/// The five named brand colors, as hex strings
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct BrandColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandDesign {
    pub brand_name: &'static str,
    /// No logo has been uploaded for the example
    pub logo_url: Option<&'static str>,
    pub colors: BrandColors,
    pub font_family: &'static str,
    pub brand_voice: &'static str,
    pub tone: &'static str,
}

pub const EXAMPLE_BRAND_DESIGN: BrandDesign = BrandDesign {
    brand_name: "TechCorp Solutions",
    logo_url: None,
    colors: BrandColors {
        primary: "#3B82F6",
        secondary: "#1E293B",
        accent: "#8B5CF6",
        background: "#0F172A",
        foreground: "#F8FAFC",
    },
    font_family: "Inter",
    brand_voice: "Innovation Through Technology",
    tone: "Professional",
};
