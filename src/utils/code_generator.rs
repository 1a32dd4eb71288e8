//! Deterministic short code generation.
//!
//! A short code is derived from the URL alone: the first four bytes of the
//! MD5 digest of the URL, read as a little-endian `u32`, encoded in base62.
//! MD5 is used for speed and spread, not for collision resistance.

use md5::{Digest, Md5};

use crate::utils::base62;

/// Longest code [`generate_code`] can return (`62^6 > 2^32`).
pub const MAX_CODE_LEN: usize = 6;

/// Derives the short code for `url`.
///
/// Identical inputs always produce identical codes. Distinct inputs may
/// collide; detecting that is left to the store.
///
/// # Examples
///
/// ```
/// use link_shortener::utils::code_generator::generate_code;
///
/// assert_eq!(generate_code("http://example.com"), "1f8GXD");
/// ```
pub fn generate_code(url: &str) -> String {
    let digest = Md5::digest(url.as_bytes());
    let prefix = u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]);

    base62::encode(u64::from(prefix))
}
