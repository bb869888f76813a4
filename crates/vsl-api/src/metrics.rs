//! Prometheus metrics for monitoring API performance and health.

use std::{sync::LazyLock, time::Instant};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use regex::Regex;

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let builder = PrometheusBuilder::new();

    // Request duration buckets, in seconds
    let builder = builder.set_buckets_for_metric(
        Matcher::Full("http_request_duration_seconds".to_string()),
        &[
            0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ],
    )?;

    let handle = builder.install_recorder()?;

    Ok(handle)
}

/// Middleware to record HTTP request metrics
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    let in_flight = gauge!(
        "http_requests_in_flight",
        "method" => method.clone(),
        "path" => path.clone()
    );
    in_flight.increment(1.0);

    let response: Response = next.run(req).await;

    in_flight.decrement(1.0);

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(duration);

    response
}

/// Segment after a collection name is always a resource id, numeric or slug
static RESOURCE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(chapters|projects|members|tasks|budget|notes)/[^/]+").unwrap()
});

/// Collapse resource ids into `:id` to keep label cardinality bounded.
fn normalize_path(path: &str) -> String {
    RESOURCE_ID.replace_all(path, "/$1/:id").into_owned()
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Record a write made through the API, labelled by resource kind
pub fn record_write(resource: &'static str, action: &'static str) {
    counter!(
        "store_writes_total",
        "resource" => resource,
        "action" => action
    )
    .increment(1);
}
