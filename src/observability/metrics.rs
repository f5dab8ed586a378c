//! Metrics collection and exposition.
//!
//! # Metrics
//! - `racecard_proxy_requests_total` (counter): handled requests by
//!   method and status
//! - `racecard_proxy_request_duration_seconds` (histogram): end-to-end
//!   invocation latency, dominated by the upstream fetch

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "racecard_proxy_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!("racecard_proxy_request_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}
