//! The identifier types this crate knows about.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the supported Australian identifier types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Australian Business Number (11 digits, mod 89).
    Abn,
    /// Australian Company Number (9 digits, mod 10 check digit).
    Acn,
    /// Bank State Branch code (6 digits).
    Bsb,
    /// Tax File Number (9 digits, mod 11).
    Tfn,
    /// Landline or mobile phone number.
    Phone,
    /// 4-digit postcode.
    Postcode,
}

impl IdentifierKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Abn,
        Self::Acn,
        Self::Bsb,
        Self::Tfn,
        Self::Phone,
        Self::Postcode,
    ];

    /// Label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Abn => "ABN",
            Self::Acn => "ACN",
            Self::Bsb => "BSB",
            Self::Tfn => "TFN",
            Self::Phone => "Phone number",
            Self::Postcode => "Postcode",
        }
    }

    /// Cleaned digit count, for the kinds with a single fixed length.
    pub fn digit_count(self) -> Option<usize> {
        match self {
            Self::Abn => Some(11),
            Self::Acn | Self::Tfn => Some(9),
            Self::Bsb => Some(6),
            Self::Postcode => Some(4),
            Self::Phone => None,
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Error returned when parsing an unknown identifier kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown identifier kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for IdentifierKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abn" => Ok(Self::Abn),
            "acn" => Ok(Self::Acn),
            "bsb" => Ok(Self::Bsb),
            "tfn" => Ok(Self::Tfn),
            "phone" => Ok(Self::Phone),
            "postcode" => Ok(Self::Postcode),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("ABN".parse::<IdentifierKind>().unwrap(), IdentifierKind::Abn);
        assert_eq!(" bsb ".parse::<IdentifierKind>().unwrap(), IdentifierKind::Bsb);
        assert_eq!(
            "Postcode".parse::<IdentifierKind>().unwrap(),
            IdentifierKind::Postcode
        );
    }

    #[test]
    fn unknown_kind() {
        let e = "iban".parse::<IdentifierKind>().unwrap_err();
        assert_eq!(e.to_string(), "unknown identifier kind 'iban'");
    }

    #[test]
    fn display_round_trips_through_parse_for_codes() {
        for kind in [
            IdentifierKind::Abn,
            IdentifierKind::Acn,
            IdentifierKind::Bsb,
            IdentifierKind::Tfn,
        ] {
            assert_eq!(kind.to_string().parse::<IdentifierKind>().unwrap(), kind);
        }
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&IdentifierKind::Postcode).unwrap();
        assert_eq!(json, "\"postcode\"");
        let kind: IdentifierKind = serde_json::from_str("\"tfn\"").unwrap();
        assert_eq!(kind, IdentifierKind::Tfn);
    }

    #[test]
    fn phone_has_no_fixed_length() {
        assert_eq!(IdentifierKind::Phone.digit_count(), None);
        assert_eq!(IdentifierKind::Abn.digit_count(), Some(11));
    }
}
