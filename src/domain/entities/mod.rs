//! Core domain entities.
//!
//! The service has a single entity, [`Link`]: a short code paired with the
//! original URL it stands for.

pub mod link;

pub use link::Link;
