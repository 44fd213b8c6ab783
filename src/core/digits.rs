//! Numeric-string helpers shared by the identifier modules.

use super::error::IdentifierError;
use super::kind::IdentifierKind;

/// Strip every character that is not an ASCII digit.
pub fn clean_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Clean `raw` and require exactly `kind`'s digit count.
pub(crate) fn clean_fixed(
    raw: &str,
    kind: IdentifierKind,
    expected: usize,
) -> Result<String, IdentifierError> {
    let cleaned = clean_digits(raw);
    if cleaned.len() != expected {
        return Err(IdentifierError::length(kind, expected, cleaned.len()));
    }
    Ok(cleaned)
}

/// Numeric values of an all-digit string.
pub(crate) fn digit_values(digits: &str) -> Vec<i32> {
    digits.bytes().map(|b| i32::from(b - b'0')).collect()
}

/// Sum of `digits[i] * weights[i]` over the shorter of the two slices.
pub(crate) fn weighted_sum(digits: &[i32], weights: &[i32]) -> i32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// Split an all-digit string into groups of the given sizes joined by `sep`.
///
/// Sizes must add up to the string length.
pub(crate) fn group(digits: &str, sizes: &[usize], sep: &str) -> String {
    let mut out = String::with_capacity(digits.len() + sizes.len() * sep.len());
    let mut start = 0;
    for (i, size) in sizes.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(&digits[start..start + size]);
        start += size;
    }
    out
}
