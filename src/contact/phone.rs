//! Australian landline and mobile phone numbers.
//!
//! Accepted shapes after stripping everything but digits and `+`:
//!
//! | Shape | Pattern |
//! |-------|---------|
//! | Mobile, local | `0[45]` + 8 digits |
//! | Mobile, international | `+61[45]` + 8 digits |
//! | Landline, local | `0[2-9]` + 8 digits |
//! | Landline, international | `+61[2-9]` + 8 digits |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::digits::group;
use crate::core::{IdentifierError, IdentifierKind, ValidationResult};

/// Country calling code prefix.
pub const AU_COUNTRY_PREFIX: &str = "+61";

/// Digits after the trunk `0` or the `+61` prefix.
const NATIONAL_LENGTH: usize = 9;

/// Mobile or landline service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    Mobile,
    Landline,
}

/// A validated Australian phone number.
///
/// Stores the 9-digit national number; serialises in E.164 form
/// (`"+61412345678"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    national: String,
    kind: PhoneKind,
}

impl PhoneNumber {
    /// Clean and validate a phone number in local or international form.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let cleaned = clean_phone(raw);
        let national = cleaned
            .strip_prefix(AU_COUNTRY_PREFIX)
            .or_else(|| cleaned.strip_prefix('0'))
            .filter(|n| n.len() == NATIONAL_LENGTH && n.bytes().all(|b| b.is_ascii_digit()))
            .ok_or(IdentifierError::Format {
                kind: IdentifierKind::Phone,
            })?;

        let kind = match national.as_bytes()[0] {
            b'4' | b'5' => PhoneKind::Mobile,
            b'2'..=b'9' => PhoneKind::Landline,
            _ => {
                return Err(IdentifierError::Format {
                    kind: IdentifierKind::Phone,
                });
            }
        };

        Ok(Self {
            national: national.to_string(),
            kind,
        })
    }

    pub fn kind(&self) -> PhoneKind {
        self.kind
    }

    /// The 9 digits after the trunk prefix.
    pub fn national_number(&self) -> &str {
        &self.national
    }

    /// `"+61 412 345 678"`, the same as `Display`.
    pub fn to_international(&self) -> String {
        format!(
            "{AU_COUNTRY_PREFIX} {}",
            group(&self.national, &[3, 3, 3], " ")
        )
    }

    /// Local form: `"0412 345 678"` for mobiles, `"02 9876 5432"` for landlines.
    pub fn to_local(&self) -> String {
        let local = format!("0{}", self.national);
        match self.kind {
            PhoneKind::Mobile => group(&local, &[4, 3, 3], " "),
            PhoneKind::Landline => group(&local, &[2, 4, 4], " "),
        }
    }

    /// E.164 form without separators, e.g. `"+61412345678"`.
    pub fn to_e164(&self) -> String {
        format!("{AU_COUNTRY_PREFIX}{}", self.national)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_international())
    }
}

impl FromStr for PhoneNumber {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.to_e164()
    }
}

/// Keep only digits and `+`.
fn clean_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Validate an Australian landline or mobile number.
pub fn validate_phone(phone: &str) -> ValidationResult {
    PhoneNumber::parse(phone).into()
}

/// Format a phone number as `"+61 XXX XXX XXX"`.
///
/// Local 10-digit numbers starting with `0` have the `0` replaced by `+61`;
/// 12-character `+61` numbers are regrouped. Anything else is returned
/// unchanged. The leading national digit is not checked.
pub fn format_phone(phone: &str) -> String {
    let cleaned = clean_phone(phone);
    let national = if cleaned.len() == NATIONAL_LENGTH + 1 {
        cleaned.strip_prefix('0')
    } else if cleaned.len() == NATIONAL_LENGTH + AU_COUNTRY_PREFIX.len() {
        cleaned.strip_prefix(AU_COUNTRY_PREFIX)
    } else {
        None
    };

    match national {
        Some(n) if n.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{AU_COUNTRY_PREFIX} {}", group(n, &[3, 3, 3], " "))
        }
        _ => phone.to_string(),
    }
}
