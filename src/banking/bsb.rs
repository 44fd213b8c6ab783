//! Bank State Branch (BSB) codes.
//!
//! A BSB is a directory key, not a self-checking number: validation only
//! confirms six digits, not that the branch exists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::digits::{clean_fixed, group};
use crate::core::{IdentifierError, IdentifierKind, ValidationResult};

/// Digits in a cleaned BSB.
pub const BSB_LENGTH: usize = 6;

/// A well-formed BSB, displayed as `"XXX-XXX"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bsb(String);

impl Bsb {
    /// Clean and validate a BSB.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        clean_fixed(raw, IdentifierKind::Bsb, BSB_LENGTH).map(Self)
    }

    /// The 6 cleaned digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading two digits, identifying the financial institution (e.g. "06").
    pub fn institution_code(&self) -> &str {
        &self.0[..2]
    }

    /// Third digit, identifying the state (e.g. "2" for NSW/ACT).
    pub fn state_digit(&self) -> char {
        char::from(self.0.as_bytes()[2])
    }

    /// Last three digits, identifying the branch.
    pub fn branch(&self) -> &str {
        &self.0[3..]
    }
}

impl fmt::Display for Bsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group(&self.0, &[3, 3], "-"))
    }
}

impl FromStr for Bsb {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Bsb {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Bsb> for String {
    fn from(bsb: Bsb) -> Self {
        bsb.0
    }
}

/// Validate a BSB (length only).
pub fn validate_bsb(bsb: &str) -> ValidationResult {
    Bsb::parse(bsb).into()
}

/// Format a BSB as `"XXX-XXX"`, or return it unchanged unless it cleans to
/// exactly 6 digits.
pub fn format_bsb(bsb: &str) -> String {
    match clean_fixed(bsb, IdentifierKind::Bsb, BSB_LENGTH) {
        Ok(cleaned) => group(&cleaned, &[3, 3], "-"),
        Err(_) => bsb.to_string(),
    }
}
