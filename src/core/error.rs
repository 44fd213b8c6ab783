use thiserror::Error;

use super::kind::IdentifierKind;

/// Why an identifier failed validation.
///
/// The `Display` text is the user-facing message shown next to the form
/// field, so it is kept short and free of the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IdentifierError {
    /// Cleaned input does not have the required digit count.
    #[error("{kind} must be {expected} digits")]
    Length {
        kind: IdentifierKind,
        expected: usize,
        actual: usize,
    },

    /// Correct length but the checksum or check digit does not hold.
    #[error("Invalid {kind} checksum")]
    Checksum { kind: IdentifierKind },

    /// Input matches none of the accepted shapes.
    #[error("Invalid Australian phone number. Format: 04XX XXX XXX or +61 4XX XXX XXX")]
    Format { kind: IdentifierKind },

    /// Correct length but the numeric value is outside the valid domain.
    #[error("Invalid Australian postcode")]
    Range {
        kind: IdentifierKind,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Discriminant of [`IdentifierError`] for exhaustive matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Length,
    Checksum,
    Format,
    Range,
}

impl IdentifierError {
    /// The category of failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Length { .. } => ErrorKind::Length,
            Self::Checksum { .. } => ErrorKind::Checksum,
            Self::Format { .. } => ErrorKind::Format,
            Self::Range { .. } => ErrorKind::Range,
        }
    }

    /// The identifier type that was being validated.
    pub fn identifier(&self) -> IdentifierKind {
        match self {
            Self::Length { kind, .. }
            | Self::Checksum { kind }
            | Self::Format { kind }
            | Self::Range { kind, .. } => *kind,
        }
    }

    pub(crate) fn length(kind: IdentifierKind, expected: usize, actual: usize) -> Self {
        Self::Length {
            kind,
            expected,
            actual,
        }
    }
}

/// A validation failure attached to a named form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name or dot-separated path (e.g. "business.abn").
    pub field: String,
    /// Category of the failure.
    pub kind: ErrorKind,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FieldError {
    /// Attach an identifier error to a field.
    pub fn new(field: impl Into<String>, error: &IdentifierError) -> Self {
        Self {
            field: field.into(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_message_names_identifier() {
        let e = IdentifierError::length(IdentifierKind::Abn, 11, 10);
        assert_eq!(e.to_string(), "ABN must be 11 digits");
        assert_eq!(e.kind(), ErrorKind::Length);
        assert_eq!(e.identifier(), IdentifierKind::Abn);
    }

    #[test]
    fn checksum_message() {
        let e = IdentifierError::Checksum {
            kind: IdentifierKind::Tfn,
        };
        assert_eq!(e.to_string(), "Invalid TFN checksum");
    }

    #[test]
    fn postcode_length_message() {
        let e = IdentifierError::length(IdentifierKind::Postcode, 4, 3);
        assert_eq!(e.to_string(), "Postcode must be 4 digits");
    }

    #[test]
    fn field_error_display() {
        let e = IdentifierError::length(IdentifierKind::Bsb, 6, 5);
        let fe = FieldError::new("bank.bsb", &e);
        assert_eq!(fe.kind, ErrorKind::Length);
        assert_eq!(fe.to_string(), "bank.bsb: BSB must be 6 digits");
    }
}
