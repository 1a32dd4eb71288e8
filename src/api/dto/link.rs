//! DTOs for the link endpoints.

use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

use crate::domain::entities::Link;
use crate::utils::request_host::join_host;

/// Request body for `POST /api/v1/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The URL to shorten; must be an absolute URL with a host.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    #[validate(custom(function = "validate_absolute_url"))]
    pub url: String,
}

/// Link representation returned by the API.
///
/// `short` is the public path `<host>/<code>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResponse {
    pub short: String,
    pub original: String,
}

impl LinkResponse {
    /// Builds the response for `link` as seen from `host`.
    pub fn from_link(host: Option<&str>, link: Link) -> Self {
        Self {
            short: join_host(host, &link.short),
            original: link.original,
        }
    }
}

/// Accepts an absolute URL with a host, exactly as written.
///
/// The raw string is what gets stored and redirected to, while `Url::parse`
/// strips surrounding whitespace and embedded tabs or newlines. Those are
/// rejected before parsing.
fn validate_absolute_url(value: &str) -> Result<(), ValidationError> {
    if value != value.trim() || value.chars().any(|c| c.is_ascii_control()) {
        return Err(ValidationError::new("url").with_message(
            "URL must not contain surrounding whitespace or control characters".into(),
        ));
    }

    let parsed = Url::parse(value).map_err(|_| {
        ValidationError::new("url").with_message("Invalid URL format".into())
    })?;

    if !parsed.has_host() {
        return Err(ValidationError::new("url").with_message("URL must have a host".into()));
    }

    Ok(())
}
