//! CodeBenders mock API
//!
//! A stateless stand-in for the CodeBenders backend used during frontend
//! development. Every endpoint validates its input and answers with canned or
//! randomly chosen data for one stage of the product-definition workflow.

pub mod branching;
pub mod catalog;
pub mod config;
pub mod docs;
pub mod error;
pub mod extract;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod smoke;

use std::sync::Arc;

pub use crate::branching::{Branch, BranchSource};
pub use crate::config::{BranchMode, Config};
pub use crate::logging::{RequestLog, RequestObserver};

/// Application state shared across all request handlers
///
/// Nothing in here is mutated by requests.
pub struct AppState {
    pub config: Config,
    /// Decides the data/empty branch of the randomized lookups
    pub branches: Arc<dyn BranchSource>,
    /// Receives a structured record of every request
    pub observer: Arc<dyn RequestObserver>,
}

impl AppState {
    /// Create a new application state from configuration
    pub fn new(config: Config) -> Self {
        let branches = branching::branch_source_for(config.branch_mode);
        Self::with_parts(config, branches, Arc::new(logging::TracingObserver))
    }

    /// Create an application state with explicit collaborators
    pub fn with_parts(
        config: Config,
        branches: Arc<dyn BranchSource>,
        observer: Arc<dyn RequestObserver>,
    ) -> Self {
        Self {
            config,
            branches,
            observer,
        }
    }
}
