//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::store::LinkStore;

/// State shared by all handlers.
///
/// Holds no per-request data; the store behind the service is the only
/// shared resource.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Creates state from an already-built service.
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }

    /// Creates state over `store`, wiring the link service in between.
    pub fn with_store(store: Arc<dyn LinkStore>) -> Self {
        Self::new(Arc::new(LinkService::new(store)))
    }
}
