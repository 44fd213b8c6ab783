use serde::Serialize;

use super::error::{ErrorKind, IdentifierError};

/// Outcome of validating one identifier.
///
/// Serialises as `{"isValid": true}` or
/// `{"isValid": false, "message": "..."}`. A message is present if and only
/// if the value is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip)]
    error: Option<IdentifierError>,
}

impl ValidationResult {
    /// A passing result.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
            error: None,
        }
    }

    /// A failing result carrying the error's message.
    pub fn invalid(error: IdentifierError) -> Self {
        Self {
            is_valid: false,
            message: Some(error.to_string()),
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// User-displayable reason, `None` when valid.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The typed error, `None` when valid.
    pub fn error(&self) -> Option<&IdentifierError> {
        self.error.as_ref()
    }

    /// Failure category, `None` when valid.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(IdentifierError::kind)
    }

    /// Convert back into a `Result`, dropping the message copy.
    pub fn into_result(self) -> Result<(), IdentifierError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<T> From<Result<T, IdentifierError>> for ValidationResult {
    fn from(result: Result<T, IdentifierError>) -> Self {
        match result {
            Ok(_) => Self::valid(),
            Err(e) => Self::invalid(e),
        }
    }
}
