//! Middleware module
//!
//! Contains Tower middleware shared by every route.

pub mod tracking;
