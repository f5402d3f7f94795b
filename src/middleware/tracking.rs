//! Request tracking middleware
//!
//! Records a counter and a latency sample for each routed request, labelled
//! with the route template rather than the raw path.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::routes::metrics::record_request;

pub async fn track_requests(
    matched_path: Option<MatchedPath>,
    request: Request,
    next: Next,
) -> Response {
    let endpoint = matched_path
        .as_ref()
        .map(MatchedPath::as_str)
        .unwrap_or("unmatched")
        .to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed = start.elapsed();
    debug!(
        endpoint = %endpoint,
        status = status,
        elapsed_ms = elapsed.as_millis() as u64,
        "Request completed"
    );
    record_request(&endpoint, status, elapsed.as_secs_f64());

    response
}
