//! Canned data served by the mock endpoints
//!
//! Everything here is a literal table; nothing is derived from requests.

pub mod brand;
pub mod keys;
pub mod personas;
pub mod projects;
pub mod thirdparty;

pub use brand::{BrandColors, BrandDesign, EXAMPLE_BRAND_DESIGN};
pub use keys::{key_requirements_for, KeyRequirement, ProviderKeyRequirements};
pub use personas::{Persona, PERSONAS};
pub use projects::{Project, PROJECTS};
pub use thirdparty::{
    providers_for_category, ProviderOption, ThirdPartyApi, THIRD_PARTY_APIS,
};
