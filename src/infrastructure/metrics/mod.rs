//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - Home feed requests by viewer kind and outcome
//! - Home feed assembly latency histogram
//! - Store calls that degraded to a default value
//! - Rows skipped because they failed to decode

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Home feed requests by viewer kind ("guest", "authenticated", "anonymous",
/// or "unknown" when the viewer could not be resolved) and outcome
/// ("rendered", "redirected", "error")
pub static FEED_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("feed_requests_total", "Total number of home feed requests")
            .namespace("blog_feed"),
        &["viewer", "outcome"],
    )
    .expect("Failed to create FEED_REQUESTS_TOTAL metric")
});

/// Home feed assembly latency in seconds
pub static FEED_ASSEMBLY_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    let buckets = vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];
    HistogramVec::new(
        HistogramOpts::new(
            "feed_assembly_duration_seconds",
            "Home feed assembly latency in seconds",
        )
        .namespace("blog_feed")
        .buckets(buckets),
        &["viewer"],
    )
    .expect("Failed to create FEED_ASSEMBLY_DURATION_SECONDS metric")
});

/// Store calls whose failure was replaced by a default value
pub static STORE_DEGRADED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "store_degraded_total",
            "Store calls that failed and fell back to a default",
        )
        .namespace("blog_feed"),
        &["operation"],
    )
    .expect("Failed to create STORE_DEGRADED_TOTAL metric")
});

/// Rows dropped from a result set because they could not be decoded
pub static SKIPPED_ROWS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("skipped_rows_total", "Rows skipped due to decode failures")
            .namespace("blog_feed"),
        &["table"],
    )
    .expect("Failed to create SKIPPED_ROWS_TOTAL metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(FEED_REQUESTS_TOTAL.clone()))
        .expect("Failed to register FEED_REQUESTS_TOTAL");
    registry
        .register(Box::new(FEED_ASSEMBLY_DURATION_SECONDS.clone()))
        .expect("Failed to register FEED_ASSEMBLY_DURATION_SECONDS");
    registry
        .register(Box::new(STORE_DEGRADED_TOTAL.clone()))
        .expect("Failed to register STORE_DEGRADED_TOTAL");
    registry
        .register(Box::new(SKIPPED_ROWS_TOTAL.clone()))
        .expect("Failed to register SKIPPED_ROWS_TOTAL");
}

/// Collect and encode all metrics as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Record a finished home feed request
pub fn record_feed_request(viewer: &str, outcome: &str, duration_secs: f64) {
    FEED_REQUESTS_TOTAL
        .with_label_values(&[viewer, outcome])
        .inc();
    FEED_ASSEMBLY_DURATION_SECONDS
        .with_label_values(&[viewer])
        .observe(duration_secs);
}

/// Record a store call that fell back to a default value
pub fn record_degraded_store_call(operation: &str) {
    STORE_DEGRADED_TOTAL.with_label_values(&[operation]).inc();
}

/// Record a row skipped during decoding
pub fn record_skipped_row(table: &str) {
    SKIPPED_ROWS_TOTAL.with_label_values(&[table]).inc();
}
