#![allow(dead_code)]

use axum_test::TestServer;
use link_shortener::domain::store::{LinkStore, StoreTimeouts};
use link_shortener::infrastructure::persistence::{InMemoryLinkStore, PgLinkStore};
use link_shortener::routes::app_router;
use link_shortener::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const HOST: &str = "sho.rt";

/// State over a fresh in-memory store, returning the store for direct seeding.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkStore>) {
    let store = Arc::new(InMemoryLinkStore::new());
    let state = AppState::with_store(store.clone());

    (state, store)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let store: Arc<dyn LinkStore> = Arc::new(PgLinkStore::new(
        Arc::new(pool),
        StoreTimeouts::default(),
    ));

    AppState::with_store(store)
}

/// Test server running the full application router.
pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    (server, store)
}

pub async fn create_test_link(store: &InMemoryLinkStore, short: &str, url: &str) {
    store.add_link(short, url).await.unwrap();
}

/// Code segment of a `<host>/<code>` short path.
pub fn code_of(short: &str) -> &str {
    short.rsplit('/').next().unwrap_or(short)
}
