//! Domain layer containing the link entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`store`] - The [`store::LinkStore`] capability and its error type
//!
//! # Design Principles
//!
//! - Domain layer depends on no other layer of this crate
//! - The store trait defines the contract implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod store;
