//! Handlers for creating and fetching links.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri, header},
};
use serde_json::json;
use tracing::debug;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_host::request_host;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Creates the short link for a URL.
///
/// # Endpoint
///
/// `POST /api/v1/links`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "short": "sho.rt/1f8GXD", "original": "http://example.com" }
/// ```
///
/// # Errors
///
/// - 400 if the content type is missing or not JSON, the body does not parse,
///   or the URL is empty or not absolute
/// - 500 if the link could not be stored
pub async fn create_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    body: Bytes,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    require_json_content_type(&headers)?;

    let payload: CreateLinkRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "failed to parse request body");
        AppError::bad_request("Invalid JSON body", json!({ "reason": e.to_string() }))
    })?;

    payload.validate().inspect_err(|e| {
        debug!(error = %e, "invalid url in request body");
    })?;

    let link = state.link_service.create_link(&payload.url).await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(request_host(&headers, &uri), link)),
    ))
}

/// Returns the link stored under a short code.
///
/// # Endpoint
///
/// `GET /api/v1/links/{short}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or the store is unavailable.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(short): Path<String>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&short).await?;

    Ok(Json(LinkResponse::from_link(
        request_host(&headers, &uri),
        link,
    )))
}

/// Accepts `application/json`, with or without parameters such as `charset`.
fn require_json_content_type(headers: &HeaderMap) -> Result<(), AppError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        debug!("no Content-Type header");
        return Err(AppError::bad_request(
            "Missing Content-Type header",
            json!({ "expected": JSON_MEDIA_TYPE }),
        ));
    };

    let media_type = value
        .to_str()
        .ok()
        .and_then(|v| v.split(';').next())
        .map(str::trim)
        .unwrap_or_default();

    if !media_type.eq_ignore_ascii_case(JSON_MEDIA_TYPE) {
        debug!(content_type = ?value, "unexpected Content-Type");
        return Err(AppError::bad_request(
            "Unsupported Content-Type",
            json!({ "expected": JSON_MEDIA_TYPE }),
        ));
    }

    Ok(())
}
