//! Link storage capability.
//!
//! [`LinkStore`] is the only component that touches external state. Handlers
//! and services receive it as `Arc<dyn LinkStore>`, so the backing technology
//! is chosen when the application is composed.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL table `links`
//! - [`crate::infrastructure::persistence::InMemoryLinkStore`] - process-local map
//! - `MockLinkStore` - generated by `mockall` under `cfg(test)`

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Default deadline for [`LinkStore::add_link`].
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Default deadline for [`LinkStore::get_original`]. Tighter than writes
/// because lookups sit on the redirect path.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(200);

/// Errors reported by a [`LinkStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("short code {short:?} is already stored")]
    Duplicate { short: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Deadlines applied to individual store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreTimeouts {
    pub write: Duration,
    pub read: Duration,
}

impl Default for StoreTimeouts {
    fn default() -> Self {
        Self {
            write: DEFAULT_WRITE_TIMEOUT,
            read: DEFAULT_READ_TIMEOUT,
        }
    }
}

/// Persistence of `short -> original` mappings.
///
/// Implementations must be safe for concurrent use and enforce uniqueness of
/// `short` themselves: of two concurrent writes for the same code exactly one
/// succeeds. Failed calls are reported once and never retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Stores a new link.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Duplicate`] if `short` is already stored
    /// - [`StoreError::Timeout`] if the write deadline elapses
    /// - [`StoreError::Database`] on connectivity or query failures
    async fn add_link(&self, short: &str, original: &str) -> StoreResult<()>;

    /// Looks up the original URL for `short`.
    ///
    /// Returns `Ok(None)` when no link is stored under `short`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Timeout`] if the read deadline elapses
    /// - [`StoreError::Database`] on connectivity or query failures
    async fn get_original(&self, short: &str) -> StoreResult<Option<String>>;
}
