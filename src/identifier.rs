//! Validation dispatched on [`IdentifierKind`], for form code that only
//! knows a field's type at runtime.

use crate::banking::{format_bsb, validate_bsb};
use crate::business::{
    format_abn, format_acn, format_tfn, validate_abn, validate_acn, validate_tfn,
};
use crate::contact::{format_phone, validate_phone, validate_postcode};
use crate::core::{FieldError, IdentifierKind, ValidationResult};

impl IdentifierKind {
    /// Validate `raw` as this kind of identifier.
    pub fn validate(self, raw: &str) -> ValidationResult {
        match self {
            Self::Abn => validate_abn(raw),
            Self::Acn => validate_acn(raw),
            Self::Bsb => validate_bsb(raw),
            Self::Tfn => validate_tfn(raw),
            Self::Phone => validate_phone(raw),
            Self::Postcode => validate_postcode(raw),
        }
    }

    /// Format `raw` canonically for this kind.
    ///
    /// Postcodes have no formatter and are returned unchanged.
    pub fn format(self, raw: &str) -> String {
        match self {
            Self::Abn => format_abn(raw),
            Self::Acn => format_acn(raw),
            Self::Bsb => format_bsb(raw),
            Self::Tfn => format_tfn(raw),
            Self::Phone => format_phone(raw),
            Self::Postcode => raw.to_string(),
        }
    }
}

/// Validate a batch of `(field, kind, value)` entries.
///
/// Returns one [`FieldError`] per failing entry, in input order; empty when
/// everything is valid.
pub fn validate_fields<'a, I>(fields: I) -> Vec<FieldError>
where
    I: IntoIterator<Item = (&'a str, IdentifierKind, &'a str)>,
{
    fields
        .into_iter()
        .filter_map(|(field, kind, raw)| {
            kind.validate(raw)
                .into_result()
                .err()
                .map(|e| FieldError::new(field, &e))
        })
        .collect()
}
