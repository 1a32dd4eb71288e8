//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::domain::store::{LinkStore, StoreError, StoreResult, StoreTimeouts};
use crate::utils::db_error::is_unique_violation_on_short;

/// PostgreSQL store backed by the `links` table.
///
/// Expects the schema from `migrations/` to be applied. Every call is bounded
/// by the configured [`StoreTimeouts`]; a call that outlives its deadline is
/// dropped, which cancels the query.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
    timeouts: StoreTimeouts,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>, timeouts: StoreTimeouts) -> Self {
        Self { pool, timeouts }
    }
}

async fn with_deadline<T, F>(operation: &'static str, after: Duration, query: F) -> StoreResult<T>
where
    F: Future<Output = StoreResult<T>>,
{
    timeout(after, query)
        .await
        .map_err(|_| StoreError::Timeout { operation, after })?
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn add_link(&self, short: &str, original: &str) -> StoreResult<()> {
        let insert = async {
            sqlx::query("INSERT INTO links (short, original) VALUES ($1, $2)")
                .bind(short)
                .bind(original)
                .execute(self.pool.as_ref())
                .await
                .map_err(|e| {
                    if is_unique_violation_on_short(&e) {
                        StoreError::Duplicate {
                            short: short.to_string(),
                        }
                    } else {
                        StoreError::Database(e)
                    }
                })?;

            Ok::<_, StoreError>(())
        };

        with_deadline("add_link", self.timeouts.write, insert).await
    }

    async fn get_original(&self, short: &str) -> StoreResult<Option<String>> {
        let select = async {
            let original =
                sqlx::query_scalar::<_, String>("SELECT original FROM links WHERE short = $1")
                    .bind(short)
                    .fetch_optional(self.pool.as_ref())
                    .await?;

            Ok::<_, StoreError>(original)
        };

        with_deadline("get_original", self.timeouts.read, select).await
    }
}
