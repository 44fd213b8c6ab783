//! Australian Business Number (ABN).
//!
//! 11 digits. Subtract 1 from the leading digit, weight all eleven digits
//! with [`ABN_WEIGHTS`] and the sum must be divisible by 89.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::acn::Acn;
use crate::core::digits::{clean_fixed, digit_values, group, weighted_sum};
use crate::core::{IdentifierError, IdentifierKind, ValidationResult};

/// Digits in a cleaned ABN.
pub const ABN_LENGTH: usize = 11;

/// Per-position weights of the ABN checksum.
pub const ABN_WEIGHTS: [i32; ABN_LENGTH] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

const ABN_MODULUS: i32 = 89;

/// A validated ABN, stored as its 11 cleaned digits.
///
/// Displays in the canonical `"XX XXX XXX XXX"` grouping and serialises as
/// the bare digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Abn(String);

impl Abn {
    /// Clean and validate an ABN.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let cleaned = clean_fixed(raw, IdentifierKind::Abn, ABN_LENGTH)?;
        if abn_checksum(&cleaned) % ABN_MODULUS != 0 {
            return Err(IdentifierError::Checksum {
                kind: IdentifierKind::Abn,
            });
        }
        Ok(Self(cleaned))
    }

    /// Derive the ABN a company is issued from its ACN.
    ///
    /// A company ABN is two check digits followed by the ACN. The leading
    /// pair contributes `prefix - 10` to the weighted sum, so exactly one
    /// prefix in `10..=98` brings the total to a multiple of 89.
    pub fn from_acn(acn: &Acn) -> Self {
        let acn_sum = weighted_sum(&digit_values(acn.as_str()), &ABN_WEIGHTS[2..]);
        let prefix = 10 + (-acn_sum).rem_euclid(ABN_MODULUS);
        Self(format!("{prefix}{}", acn.as_str()))
    }

    /// The trailing nine digits as an ACN, if they carry a valid ACN check digit.
    ///
    /// Company ABNs always embed the ACN; for other entities this is usually `None`.
    pub fn embedded_acn(&self) -> Option<Acn> {
        Acn::parse(&self.0[2..]).ok()
    }

    /// The 11 cleaned digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Abn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group(&self.0, &[2, 3, 3, 3], " "))
    }
}

impl FromStr for Abn {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Abn {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Abn> for String {
    fn from(abn: Abn) -> Self {
        abn.0
    }
}

/// Weighted sum over 11 cleaned digits with the leading digit reduced by one.
fn abn_checksum(cleaned: &str) -> i32 {
    let mut digits = digit_values(cleaned);
    // A leading 0 becomes -1; it must stay negative.
    digits[0] -= 1;
    weighted_sum(&digits, &ABN_WEIGHTS)
}

/// Validate an ABN.
///
/// Spaces and other separators are ignored. Fails with a length error
/// unless exactly 11 digits remain, then with a checksum error.
pub fn validate_abn(abn: &str) -> ValidationResult {
    Abn::parse(abn).into()
}

/// Format an ABN as `"XX XXX XXX XXX"`.
///
/// Returns the input unchanged unless it cleans to exactly 11 digits.
/// The checksum is not checked.
pub fn format_abn(abn: &str) -> String {
    match clean_fixed(abn, IdentifierKind::Abn, ABN_LENGTH) {
        Ok(cleaned) => group(&cleaned, &[2, 3, 3, 3], " "),
        Err(_) => abn.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn valid_abn() {
        assert!(validate_abn("51824753556").is_valid());
        assert!(validate_abn("53004085616").is_valid());
    }

    #[test]
    fn valid_with_spaces() {
        assert!(validate_abn("51 824 753 556").is_valid());
    }

    #[test]
    fn bad_checksum() {
        let r = validate_abn("51824753557");
        assert_eq!(r.kind(), Some(ErrorKind::Checksum));
        assert_eq!(r.message(), Some("Invalid ABN checksum"));
    }

    #[test]
    fn ten_digits_is_length_error() {
        let r = validate_abn("1234567890");
        assert_eq!(r.kind(), Some(ErrorKind::Length));
        assert_eq!(r.message(), Some("ABN must be 11 digits"));
    }

    #[test]
    fn all_zeros_is_not_clamped() {
        // (0 - 1) * 10 = -10, which is not a multiple of 89
        assert_eq!(abn_checksum("00000000000"), -10);
        assert_eq!(validate_abn("00000000000").kind(), Some(ErrorKind::Checksum));
    }

    #[test]
    fn format_groups() {
        assert_eq!(format_abn("51824753556"), "51 824 753 556");
        assert_eq!(format_abn("51-824-753-556"), "51 824 753 556");
    }

    #[test]
    fn format_wrong_length_unchanged() {
        assert_eq!(format_abn("5182475355"), "5182475355");
        assert_eq!(format_abn("abc"), "abc");
    }

    #[test]
    fn display_and_as_str() {
        let abn = Abn::parse("51 824 753 556").unwrap();
        assert_eq!(abn.as_str(), "51824753556");
        assert_eq!(abn.to_string(), "51 824 753 556");
    }

    #[test]
    fn from_acn_matches_known_company() {
        let acn = Acn::parse("004085616").unwrap();
        assert_eq!(Abn::from_acn(&acn).as_str(), "53004085616");
    }

    #[test]
    fn embedded_acn() {
        let company = Abn::parse("53004085616").unwrap();
        assert_eq!(company.embedded_acn().unwrap().as_str(), "004085616");

        let other = Abn::parse("51824753556").unwrap();
        assert!(other.embedded_acn().is_none());
    }

    #[test]
    fn serde_as_digit_string() {
        let abn = Abn::parse("51 824 753 556").unwrap();
        assert_eq!(serde_json::to_string(&abn).unwrap(), "\"51824753556\"");
        let back: Abn = serde_json::from_str("\"51 824 753 556\"").unwrap();
        assert_eq!(back, abn);
        assert!(serde_json::from_str::<Abn>("\"51824753557\"").is_err());
    }
}
