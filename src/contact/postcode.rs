//! Australian postcodes and the state each postcode range is allocated to.
//!
//! Validity is a coarse bound (`0200..=9999`), not a registry lookup:
//! many numbers in range are unallocated and still pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::digits::clean_fixed;
use crate::core::{IdentifierError, IdentifierKind, ValidationResult};

/// Digits in a postcode.
pub const POSTCODE_LENGTH: usize = 4;

/// Lowest accepted postcode value.
pub const POSTCODE_MIN: u32 = 200;

/// Highest accepted postcode value.
pub const POSTCODE_MAX: u32 = 9999;

/// Australian state or territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    Act,
    Nsw,
    Nt,
    Qld,
    Sa,
    Tas,
    Vic,
    Wa,
}

impl State {
    pub const ALL: [Self; 8] = [
        Self::Act,
        Self::Nsw,
        Self::Nt,
        Self::Qld,
        Self::Sa,
        Self::Tas,
        Self::Vic,
        Self::Wa,
    ];

    /// Standard abbreviation, e.g. "NSW".
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Act => "ACT",
            Self::Nsw => "NSW",
            Self::Nt => "NT",
            Self::Qld => "QLD",
            Self::Sa => "SA",
            Self::Tas => "TAS",
            Self::Vic => "VIC",
            Self::Wa => "WA",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Act => "Australian Capital Territory",
            Self::Nsw => "New South Wales",
            Self::Nt => "Northern Territory",
            Self::Qld => "Queensland",
            Self::Sa => "South Australia",
            Self::Tas => "Tasmania",
            Self::Vic => "Victoria",
            Self::Wa => "Western Australia",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Error returned when parsing an unknown state abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown Australian state '{0}'")]
pub struct UnknownState(pub String);

impl FromStr for State {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|state| state.abbreviation() == upper)
            .ok_or_else(|| UnknownState(s.to_string()))
    }
}

/// Australia Post allocation ranges (inclusive), sorted by lower bound.
static STATE_RANGES: &[(u16, u16, State)] = &[
    (200, 299, State::Act),
    (800, 999, State::Nt),
    (1000, 2599, State::Nsw),
    (2600, 2618, State::Act),
    (2619, 2899, State::Nsw),
    (2900, 2920, State::Act),
    (2921, 2999, State::Nsw),
    (3000, 3999, State::Vic),
    (4000, 4999, State::Qld),
    (5000, 5999, State::Sa),
    (6000, 6797, State::Wa),
    (6800, 6999, State::Wa),
    (7000, 7999, State::Tas),
    (8000, 8999, State::Vic),
    (9000, 9999, State::Qld),
];

/// A postcode within the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Postcode(u16);

impl Postcode {
    /// Clean and validate a postcode.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let cleaned = clean_fixed(raw, IdentifierKind::Postcode, POSTCODE_LENGTH)?;
        let value: u32 = cleaned.parse().map_err(|_| {
            IdentifierError::length(IdentifierKind::Postcode, POSTCODE_LENGTH, cleaned.len())
        })?;
        if !(POSTCODE_MIN..=POSTCODE_MAX).contains(&value) {
            return Err(IdentifierError::Range {
                kind: IdentifierKind::Postcode,
                value,
                min: POSTCODE_MIN,
                max: POSTCODE_MAX,
            });
        }
        // In range, so it fits in u16.
        Ok(Self(value as u16))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// The state the postcode range is allocated to, if any.
    ///
    /// Ranges with no allocation (e.g. 0300–0799) return `None`; they still
    /// pass validation.
    pub fn state(self) -> Option<State> {
        STATE_RANGES
            .iter()
            .find(|(lo, hi, _)| (*lo..=*hi).contains(&self.0))
            .map(|(_, _, state)| *state)
    }

    /// Whether this postcode is allocated to `state`.
    pub fn belongs_to(self, state: State) -> bool {
        self.state() == Some(state)
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for Postcode {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Postcode {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Postcode> for String {
    fn from(postcode: Postcode) -> Self {
        postcode.to_string()
    }
}

/// Validate a 4-digit Australian postcode.
pub fn validate_postcode(postcode: &str) -> ValidationResult {
    Postcode::parse(postcode).into()
}
