//! Link creation and retrieval service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info, instrument};

use crate::domain::entities::Link;
use crate::domain::store::{LinkStore, StoreError};
use crate::error::AppError;
use crate::utils::base62::is_valid_code;
use crate::utils::code_generator::generate_code;

/// Service for creating and resolving shortened links.
///
/// Short codes are derived from the URL itself, so shortening the same URL
/// twice yields the same link. Store failures are logged here and surfaced as
/// [`AppError`]s; nothing is retried.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
}

impl LinkService {
    /// Creates a new link service over the given store.
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Creates (or re-confirms) the link for `original`.
    ///
    /// `original` must already be validated as an absolute URL.
    ///
    /// # Collisions
    ///
    /// If the code is already stored for the same URL the existing link is
    /// returned. If it is stored for a different URL the two URLs collide on
    /// their digest prefix and the request fails.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the link could not be stored or a
    /// different URL already owns the code.
    #[instrument(skip(self), fields(short = tracing::field::Empty))]
    pub async fn create_link(&self, original: &str) -> Result<Link, AppError> {
        let short = generate_code(original);
        tracing::Span::current().record("short", short.as_str());
        debug!("short code generated");

        match self.store.add_link(&short, original).await {
            Ok(()) => {
                metrics::counter!("links_created_total").increment(1);
                Ok(Link::new(short, original))
            }
            Err(StoreError::Duplicate { .. }) => self.resolve_duplicate(short, original).await,
            Err(e) => {
                error!(error = %e, "failed to store link");
                metrics::counter!("link_store_errors_total", "operation" => "add_link")
                    .increment(1);
                Err(AppError::internal(
                    "Failed to store link",
                    json!({ "short": short }),
                ))
            }
        }
    }

    /// Decides the outcome of a create whose code is already taken.
    async fn resolve_duplicate(&self, short: String, original: &str) -> Result<Link, AppError> {
        match self.store.get_original(&short).await {
            Ok(Some(existing)) if existing == original => {
                debug!("link already stored");
                Ok(Link::new(short, existing))
            }
            Ok(Some(existing)) => {
                error!(%existing, "short code collision between different URLs");
                Err(AppError::internal(
                    "Short code collision",
                    json!({ "short": short }),
                ))
            }
            Ok(None) => {
                error!("short code reported as duplicate but not found");
                Err(AppError::internal(
                    "Failed to store link",
                    json!({ "short": short }),
                ))
            }
            Err(e) => {
                error!(error = %e, "failed to read back duplicate link");
                metrics::counter!("link_store_errors_total", "operation" => "get_original")
                    .increment(1);
                Err(AppError::internal(
                    "Failed to store link",
                    json!({ "short": short }),
                ))
            }
        }
    }

    /// Resolves a short code to its link.
    ///
    /// Malformed codes are rejected without a store call. Store failures are
    /// logged and reported as not found, so callers cannot tell an unknown
    /// code from an unavailable store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link cannot be resolved.
    #[instrument(skip(self))]
    pub async fn get_link(&self, short: &str) -> Result<Link, AppError> {
        if !is_valid_code(short) {
            debug!("malformed short code");
            return Err(not_found(short));
        }

        match self.store.get_original(short).await {
            Ok(Some(original)) => Ok(Link::new(short, original)),
            Ok(None) => {
                info!("unknown link");
                Err(not_found(short))
            }
            Err(e) => {
                error!(error = %e, "failed to look up link");
                metrics::counter!("link_store_errors_total", "operation" => "get_original")
                    .increment(1);
                Err(not_found(short))
            }
        }
    }
}

fn not_found(short: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "short": short }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::MockLinkStore;
    use std::time::Duration;

    fn service(store: MockLinkStore) -> LinkService {
        LinkService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_create_link_success() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_add_link()
            .withf(|short, original| short == "1f8GXD" && original == "http://example.com")
            .times(1)
            .returning(|_, _| Ok(()));

        let result = service(mock_store)
            .create_link("http://example.com")
            .await;

        assert!(result.is_ok());
        let link = result.unwrap();
        assert_eq!(link.short, "1f8GXD");
        assert_eq!(link.original, "http://example.com");
    }

    #[tokio::test]
    async fn test_create_link_same_url_is_idempotent() {
        let mut mock_store = MockLinkStore::new();

        mock_store.expect_add_link().times(1).returning(|short, _| {
            Err(StoreError::Duplicate {
                short: short.to_string(),
            })
        });

        mock_store
            .expect_get_original()
            .withf(|short| short == "1f8GXD")
            .times(1)
            .returning(|_| Ok(Some("http://example.com".to_string())));

        let result = service(mock_store)
            .create_link("http://example.com")
            .await;

        let link = result.unwrap();
        assert_eq!(link, Link::new("1f8GXD", "http://example.com"));
    }

    #[tokio::test]
    async fn test_create_link_collision_with_different_url() {
        let mut mock_store = MockLinkStore::new();

        mock_store.expect_add_link().times(1).returning(|short, _| {
            Err(StoreError::Duplicate {
                short: short.to_string(),
            })
        });

        mock_store
            .expect_get_original()
            .times(1)
            .returning(|_| Ok(Some("http://another.example".to_string())));

        let result = service(mock_store)
            .create_link("http://example.com")
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.to_string().contains("collision"));
    }

    #[tokio::test]
    async fn test_create_link_store_timeout() {
        let mut mock_store = MockLinkStore::new();

        mock_store.expect_add_link().times(1).returning(|_, _| {
            Err(StoreError::Timeout {
                operation: "add_link",
                after: Duration::from_secs(1),
            })
        });
        mock_store.expect_get_original().times(0);

        let result = service(mock_store)
            .create_link("http://example.com")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_link_duplicate_read_back_fails() {
        let mut mock_store = MockLinkStore::new();

        mock_store.expect_add_link().times(1).returning(|short, _| {
            Err(StoreError::Duplicate {
                short: short.to_string(),
            })
        });
        mock_store.expect_get_original().times(1).returning(|_| {
            Err(StoreError::Timeout {
                operation: "get_original",
                after: Duration::from_millis(200),
            })
        });

        let result = service(mock_store)
            .create_link("http://example.com")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_get_link_found() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_get_original()
            .withf(|short| short == "test")
            .times(1)
            .returning(|_| Ok(Some("http://example.com".to_string())));

        let link = service(mock_store).get_link("test").await.unwrap();

        assert_eq!(link.short, "test");
        assert_eq!(link.original, "http://example.com");
    }

    #[tokio::test]
    async fn test_get_link_unknown() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_get_original()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_store).get_link("test2").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_link_store_error_is_not_found() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_get_original()
            .times(1)
            .returning(|_| Err(StoreError::Database(sqlx::Error::PoolTimedOut)));

        let result = service(mock_store).get_link("test").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_link_malformed_code_skips_store() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_get_original().times(0);

        let service = service(mock_store);

        for short in ["bad-code", "under_score", "doesnotexist", "ünï"] {
            let result = service.get_link(short).await;
            assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
        }
    }
}
