//! Link entity representing a shortened URL mapping.

/// An immutable pairing of a short code and the URL it resolves to.
///
/// `short` is a pure function of `original` (see
/// [`crate::utils::code_generator::generate_code`]); a stored link is never
/// updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub short: String,
    pub original: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(short: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            original: original.into(),
        }
    }
}
