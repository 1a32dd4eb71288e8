//! Link store implementations.
//!
//! # Stores
//!
//! - [`PgLinkStore`] - PostgreSQL storage using SQLx runtime queries
//! - [`InMemoryLinkStore`] - Process-local storage for tests and development

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::InMemoryLinkStore;
pub use pg_link_store::PgLinkStore;
