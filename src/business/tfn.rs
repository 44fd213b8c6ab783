//! Tax File Number (TFN).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::digits::{clean_fixed, digit_values, group, weighted_sum};
use crate::core::{IdentifierError, IdentifierKind, ValidationResult};

/// Digits in a cleaned TFN.
pub const TFN_LENGTH: usize = 9;

/// Per-position weights; the weighted sum must be divisible by 11.
pub const TFN_WEIGHTS: [i32; TFN_LENGTH] = [1, 4, 3, 7, 5, 8, 6, 9, 10];

/// A validated TFN.
///
/// `Debug` does not print the number.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tfn(String);

impl Tfn {
    /// Clean and validate a TFN.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let cleaned = clean_fixed(raw, IdentifierKind::Tfn, TFN_LENGTH)?;
        if weighted_sum(&digit_values(&cleaned), &TFN_WEIGHTS) % 11 != 0 {
            return Err(IdentifierError::Checksum {
                kind: IdentifierKind::Tfn,
            });
        }
        Ok(Self(cleaned))
    }

    /// The 9 cleaned digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Tfn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tfn([REDACTED])")
    }
}

impl fmt::Display for Tfn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group(&self.0, &[3, 3, 3], " "))
    }
}

impl FromStr for Tfn {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Tfn {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Tfn> for String {
    fn from(tfn: Tfn) -> Self {
        tfn.0
    }
}

/// Validate a TFN.
pub fn validate_tfn(tfn: &str) -> ValidationResult {
    Tfn::parse(tfn).into()
}

/// Format a TFN as `"XXX XXX XXX"`; input that does not clean to 9 digits
/// is returned unchanged.
pub fn format_tfn(tfn: &str) -> String {
    match clean_fixed(tfn, IdentifierKind::Tfn, TFN_LENGTH) {
        Ok(cleaned) => group(&cleaned, &[3, 3, 3], " "),
        Err(_) => tfn.to_string(),
    }
}
