//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /readyz`                - Readiness probe
//! - `POST /api/v1/links`          - Create a short link
//! - `GET  /api/v1/links/{short}`  - Fetch link metadata
//! - `GET  /{short}`               - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Metrics** - Request count and latency per matched route

use crate::api;
use crate::api::handlers::{readyz_handler, redirect_handler};
use crate::api::middleware::{metrics, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Request timeouts are applied by the caller (see [`crate::server::run`]).
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/readyz", get(readyz_handler))
        .route("/{short}", get(redirect_handler))
        .nest("/api/v1", api::routes::link_routes())
        .route_layer(middleware::from_fn(metrics::track))
        .with_state(state)
        .layer(tracing::layer())
}
