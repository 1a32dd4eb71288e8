//! API route configuration.

use crate::api::handlers::{create_link_handler, get_link_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned link API, nested under `/api/v1`.
///
/// # Endpoints
///
/// - `POST /links`          - Create the short link for a URL
/// - `GET  /links/{short}`  - Fetch the link stored under a short code
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route("/links/{short}", get(get_link_handler))
}
