//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod links;
pub mod readyz;
pub mod redirect;

pub use links::{create_link_handler, get_link_handler};
pub use readyz::readyz_handler;
pub use redirect::redirect_handler;
