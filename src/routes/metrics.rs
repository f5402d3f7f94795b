//! Prometheus metrics endpoint
//!
//! Exposes request counters and latencies in Prometheus format.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    metrics::describe_counter!(
        "mock_api_requests_total",
        "Total number of requests handled, by endpoint and status"
    );
    metrics::describe_histogram!(
        "mock_api_request_duration_seconds",
        "Request duration in seconds"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a handled request
pub fn record_request(endpoint: &str, status: u16, duration_secs: f64) {
    metrics::counter!(
        "mock_api_requests_total",
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("mock_api_request_duration_seconds", "endpoint" => endpoint.to_string())
        .record(duration_secs);
}
