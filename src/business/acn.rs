//! Australian Company Number (ACN).
//!
//! 9 digits; the last is a check digit over the first eight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::abn::Abn;
use crate::core::digits::{clean_fixed, digit_values, group, weighted_sum};
use crate::core::{IdentifierError, IdentifierKind, ValidationResult};

/// Digits in a cleaned ACN.
pub const ACN_LENGTH: usize = 9;

/// Weights applied to the first eight ACN digits.
pub const ACN_WEIGHTS: [i32; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

/// A validated ACN, stored as its 9 cleaned digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Acn(String);

impl Acn {
    /// Clean and validate an ACN.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let cleaned = clean_fixed(raw, IdentifierKind::Acn, ACN_LENGTH)?;
        let digits = digit_values(&cleaned);
        if digits[8] != acn_check_digit(&digits[..8]) {
            return Err(IdentifierError::Checksum {
                kind: IdentifierKind::Acn,
            });
        }
        Ok(Self(cleaned))
    }

    /// Whether `abn` is the ABN issued to this company.
    pub fn matches_abn(&self, abn: &Abn) -> bool {
        abn.as_str().ends_with(self.as_str())
    }

    /// The 9 cleaned digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Acn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group(&self.0, &[3, 3, 3], " "))
    }
}

impl FromStr for Acn {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Acn {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Acn> for String {
    fn from(acn: Acn) -> Self {
        acn.0
    }
}

/// `(10 - sum mod 10) mod 10` over the first eight digits.
fn acn_check_digit(first_eight: &[i32]) -> i32 {
    let sum = weighted_sum(first_eight, &ACN_WEIGHTS);
    (10 - sum % 10) % 10
}

/// Validate an ACN.
pub fn validate_acn(acn: &str) -> ValidationResult {
    Acn::parse(acn).into()
}

/// Format an ACN as `"XXX XXX XXX"`, or return it unchanged unless it
/// cleans to exactly 9 digits.
pub fn format_acn(acn: &str) -> String {
    match clean_fixed(acn, IdentifierKind::Acn, ACN_LENGTH) {
        Ok(cleaned) => group(&cleaned, &[3, 3, 3], " "),
        Err(_) => acn.to_string(),
    }
}
