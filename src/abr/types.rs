//! ABN Lookup response types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::AbrError;
use crate::business::{Abn, Acn};
use crate::contact::{Postcode, State};

/// Registration status of an ABN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AbnStatus {
    Active,
    Cancelled,
    /// A status string this crate does not know.
    Other(String),
}

impl AbnStatus {
    fn from_api(s: &str) -> Self {
        match s.trim() {
            "Active" => Self::Active,
            "Cancelled" => Self::Cancelled,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AbnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Cancelled => write!(f, "Cancelled"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Register details for one ABN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbnDetails {
    pub abn: Abn,
    pub status: AbnStatus,
    /// Date the current status took effect.
    pub status_effective_from: Option<NaiveDate>,
    /// ACN, for companies.
    pub acn: Option<Acn>,
    /// Legal entity name.
    pub entity_name: String,
    /// ABR entity type code (e.g. "PRV" for an Australian private company).
    pub entity_type_code: Option<String>,
    pub entity_type_name: Option<String>,
    /// Registered business (trading) names.
    pub business_names: Vec<String>,
    /// Main business location postcode.
    pub postcode: Option<Postcode>,
    /// Main business location state.
    pub state: Option<State>,
    /// GST registration date, if registered.
    pub gst_registered_from: Option<NaiveDate>,
}

impl AbnDetails {
    pub fn is_active(&self) -> bool {
        self.status == AbnStatus::Active
    }

    pub fn is_gst_registered(&self) -> bool {
        self.gst_registered_from.is_some()
    }
}

/// Raw `AbnDetails.aspx` / `AcnDetails.aspx` JSON body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AbrApiResponse {
    #[serde(default)]
    abn: Option<String>,
    #[serde(default)]
    abn_status: Option<String>,
    #[serde(default)]
    abn_status_effective_from: Option<String>,
    #[serde(default)]
    acn: Option<String>,
    #[serde(default)]
    address_postcode: Option<String>,
    #[serde(default)]
    address_state: Option<String>,
    #[serde(default)]
    business_name: Option<Vec<String>>,
    #[serde(default)]
    entity_name: Option<String>,
    #[serde(default)]
    entity_type_code: Option<String>,
    #[serde(default)]
    entity_type_name: Option<String>,
    #[serde(default)]
    gst: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Treat empty strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_date(field: &str, value: Option<String>) -> Result<Option<NaiveDate>, AbrError> {
    non_empty(value)
        .map(|v| {
            NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                .map_err(|e| AbrError::Parse(format!("{field} '{v}': {e}")))
        })
        .transpose()
}

impl AbrApiResponse {
    /// Service-reported error message, if any.
    pub(crate) fn error_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }

    pub(crate) fn into_details(self) -> Result<AbnDetails, AbrError> {
        if let Some(msg) = self.error_message() {
            return Err(AbrError::Api(msg.to_string()));
        }
        let abn = non_empty(self.abn).ok_or(AbrError::NotFound)?;

        Ok(AbnDetails {
            abn: Abn::parse(&abn)?,
            status: AbnStatus::from_api(self.abn_status.as_deref().unwrap_or_default()),
            status_effective_from: parse_date(
                "AbnStatusEffectiveFrom",
                self.abn_status_effective_from,
            )?,
            acn: non_empty(self.acn).map(|a| Acn::parse(&a)).transpose()?,
            entity_name: non_empty(self.entity_name).unwrap_or_default(),
            entity_type_code: non_empty(self.entity_type_code),
            entity_type_name: non_empty(self.entity_type_name),
            business_names: self
                .business_name
                .unwrap_or_default()
                .into_iter()
                .filter_map(|n| non_empty(Some(n)))
                .collect(),
            // Location fields are informational; a malformed one is dropped.
            postcode: non_empty(self.address_postcode).and_then(|p| Postcode::parse(&p).ok()),
            state: non_empty(self.address_state).and_then(|s| s.parse().ok()),
            gst_registered_from: parse_date("Gst", self.gst)?,
        })
    }
}

/// Strip a JSONP `callback(...)` wrapper; plain JSON passes through.
pub(crate) fn strip_jsonp(body: &str) -> Result<&str, AbrError> {
    let body = body.trim();
    if body.starts_with('{') {
        return Ok(body);
    }
    let open = body
        .find('(')
        .ok_or_else(|| AbrError::Parse("expected JSONP callback wrapper".into()))?;
    let close = body
        .rfind(')')
        .filter(|&close| close > open)
        .ok_or_else(|| AbrError::Parse("unterminated JSONP callback wrapper".into()))?;
    Ok(&body[open + 1..close])
}
