//! Utility functions for code generation and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`base62`] - Base62 codec for short codes
//! - [`code_generator`] - Deterministic short code generation from URLs
//! - [`request_host`] - Host extraction and public short URL construction
//! - [`db_error`] - Classification of database errors

pub mod base62;
pub mod code_generator;
pub mod db_error;
pub mod request_host;
