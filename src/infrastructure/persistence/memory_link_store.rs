//! In-memory implementation of the link store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::store::{LinkStore, StoreError, StoreResult};

/// A link store that keeps mappings in process memory.
///
/// Has the same uniqueness semantics as the PostgreSQL store. Contents are
/// lost when the process exits.
///
/// # Use Cases
///
/// - Handler and router tests
/// - Local development without a database (`STORE_BACKEND=memory`)
#[derive(Default)]
pub struct InMemoryLinkStore {
    links: RwLock<HashMap<String, String>>,
}

impl InMemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    /// Returns true if no links are stored.
    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn add_link(&self, short: &str, original: &str) -> StoreResult<()> {
        match self.links.write().await.entry(short.to_string()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate {
                short: short.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(original.to_string());
                Ok(())
            }
        }
    }

    async fn get_original(&self, short: &str) -> StoreResult<Option<String>> {
        Ok(self.links.read().await.get(short).cloned())
    }
}
