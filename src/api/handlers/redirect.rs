//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::error;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short}`
///
/// Always answers `307 Temporary Redirect`: the mapping never changes, but
/// clients are not invited to cache it.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or the store is unavailable.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(short): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.get_link(&short).await?;
    let location = location_header(&link.original)?;

    Ok((
        StatusCode::TEMPORARY_REDIRECT,
        [(header::LOCATION, location)],
    ))
}

/// Converts a stored URL into a `Location` value.
///
/// URLs with raw non-ASCII characters are re-serialized in their
/// percent-encoded form, since header values only carry visible ASCII.
fn location_header(original: &str) -> Result<HeaderValue, AppError> {
    if original.is_ascii()
        && let Ok(value) = HeaderValue::from_str(original)
    {
        return Ok(value);
    }

    Url::parse(original)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            error!(original, "stored URL cannot be used as a redirect target");
            AppError::internal("Invalid redirect target", json!({}))
        })
}
