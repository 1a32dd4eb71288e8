//! Request metrics middleware.
//!
//! Records through the `metrics` facade. Without an installed recorder the
//! calls are no-ops; installing an exporter is left to the deployment.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Counter of handled requests, labelled by method, route and status.
pub const REQUESTS_TOTAL: &str = "http_requests_total";

/// Histogram of request latency in seconds, same labels as [`REQUESTS_TOTAL`].
pub const REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Records count and latency for each routed request.
///
/// Uses the matched route template (`/api/v1/links/{short}`) rather than the
/// raw path so label cardinality stays bounded. Install with
/// `Router::route_layer(axum::middleware::from_fn(track))`.
pub async fn track(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let method = req.method().to_string();

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();
    let labels = [("method", method), ("path", path), ("status", status)];

    metrics::counter!(REQUESTS_TOTAL, &labels).increment(1);
    metrics::histogram!(REQUEST_DURATION_SECONDS, &labels).record(latency);

    response
}
