//! Request host extraction for building public short URLs.

use axum::http::{HeaderMap, Uri, header};

/// Returns the host the client addressed, including any port.
///
/// Prefers the `Host` header and falls back to the authority of the request
/// URI (HTTP/2 requests carry it there). Returns `None` when neither is
/// present or the header is not valid UTF-8.
pub fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> Option<&'a str> {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
}

/// Joins a host and a short code into the public path `<host>/<code>`.
///
/// Without a host the bare code is returned.
pub fn join_host(host: Option<&str>, code: &str) -> String {
    match host.map(|h| h.trim_end_matches('/')) {
        Some(host) if !host.is_empty() => format!("{host}/{code}"),
        _ => code.to_string(),
    }
}
