//! Handler for the readiness probe.

use axum::http::StatusCode;

/// Reports that the process is serving requests.
///
/// # Endpoint
///
/// `GET /readyz`
///
/// Always `200 OK` with an empty body; the store is not consulted.
pub async fn readyz_handler() -> StatusCode {
    StatusCode::OK
}
