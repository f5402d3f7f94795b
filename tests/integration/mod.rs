//! Integration tests for the mock API
//!
//! These tests drive the complete router: extraction, validation, response
//! shaping and request logging.

mod auth;
mod personas;
mod prd;
mod smoke;
