//! Base62 codec for short codes.
//!
//! Converts between `u64` values and strings over the alphabet
//! `0-9a-zA-Z`, most-significant digit first, without padding.

use thiserror::Error;

/// Digit alphabet, indexed by digit value.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of the longest encoding, `encode(u64::MAX)`.
pub const MAX_ENCODED_LEN: usize = 11;

const BASE: u64 = 62;

/// Errors returned by [`decode`] for input that [`encode`] never produces.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("short code is empty")]
    Empty,

    #[error("invalid base62 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("short code does not fit in 64 bits")]
    Overflow,
}

/// Encodes `value` in base62.
///
/// Zero encodes to `"0"`; any other value has no leading zero digit.
///
/// # Examples
///
/// ```
/// use link_shortener::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(MAX_ENCODED_LEN);
    while value > 0 {
        digits.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }

    digits.iter().rev().map(|&digit| char::from(digit)).collect()
}

/// Decodes a base62 string produced by [`encode`].
///
/// # Errors
///
/// Returns [`DecodeError`] if `code` is empty, contains a character outside
/// [`ALPHABET`], or represents a value of 2^64 or more.
pub fn decode(code: &str) -> Result<u64, DecodeError> {
    if code.is_empty() {
        return Err(DecodeError::Empty);
    }

    code.chars()
        .enumerate()
        .try_fold(0u64, |acc, (position, character)| {
            let digit = digit_value(character).ok_or(DecodeError::InvalidCharacter {
                character,
                position,
            })?;

            acc.checked_mul(BASE)
                .and_then(|shifted| shifted.checked_add(digit))
                .ok_or(DecodeError::Overflow)
        })
}

/// Returns true if `code` is a well-formed short code.
pub fn is_valid_code(code: &str) -> bool {
    decode(code).is_ok()
}

fn digit_value(character: char) -> Option<u64> {
    let value = match character {
        '0'..='9' => character as u64 - '0' as u64,
        'a'..='z' => character as u64 - 'a' as u64 + 10,
        'A'..='Z' => character as u64 - 'A' as u64 + 36,
        _ => return None,
    };

    Some(value)
}
