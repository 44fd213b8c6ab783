//! ABN Lookup client error types.

use crate::core::IdentifierError;

/// Errors from ABN Lookup calls.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AbrError {
    /// Missing or invalid client configuration.
    #[error("ABR configuration error: {0}")]
    Config(String),

    /// Transport error (connection, TLS, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The service returned a non-2xx status.
    #[error("ABR {endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The service answered with an error message (e.g. an unknown GUID).
    #[error("ABR API error: {0}")]
    Api(String),

    /// No record exists for the identifier.
    #[error("no ABR record found")]
    NotFound,

    /// The response body could not be parsed.
    #[error("ABR parse error: {0}")]
    Parse(String),

    /// The service returned an identifier that fails local validation.
    #[error("ABR returned an invalid identifier: {0}")]
    InvalidRecord(#[from] IdentifierError),
}
