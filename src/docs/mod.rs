//! API Documentation module
//!
//! Provides OpenAPI specification generation for the mock API using utoipa.

mod openapi;

pub use openapi::MockApiDoc;
