//! Case classification and conversion.
//!
//! Per-byte ASCII case mapping plus whole-string conversions matching
//! `String.prototype.toLowerCase` / `toUpperCase` for ASCII input.
//! Bytes outside `[A-Za-z]` pass through unchanged.

/// Returns `true` if `c` is an uppercase ASCII letter (`[A-Z]`).
#[inline]
pub fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

/// Returns `true` if `c` is a lowercase ASCII letter (`[a-z]`).
#[inline]
pub fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

/// Converts `c` to uppercase if it is a lowercase ASCII letter.
#[inline]
pub fn to_upper(c: u8) -> u8 {
    if is_lower(c) { c - 32 } else { c }
}

/// Converts `c` to lowercase if it is an uppercase ASCII letter.
#[inline]
pub fn to_lower(c: u8) -> u8 {
    if is_upper(c) { c + 32 } else { c }
}

/// Returns a copy of `s` with every ASCII letter mapped to lowercase.
///
/// Equivalent to `String.prototype.toLowerCase` over ASCII code units.
/// Non-letter bytes (digits, punctuation, whitespace, high bytes) are
/// copied verbatim.
pub fn lower_case(s: &[u8]) -> Vec<u8> {
    s.iter().map(|&b| to_lower(b)).collect()
}

/// Returns a copy of `s` with every ASCII letter mapped to uppercase.
///
/// Equivalent to `String.prototype.toUpperCase` over ASCII code units.
pub fn upper_case(s: &[u8]) -> Vec<u8> {
    s.iter().map(|&b| to_upper(b)).collect()
}
