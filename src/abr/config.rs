//! ABN Lookup client configuration.

use std::fmt;
use std::time::Duration;

use super::error::AbrError;

/// Public JSON endpoint of the ABN Lookup web services.
pub const DEFAULT_ENDPOINT: &str = "https://abr.business.gov.au/json";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the authentication GUID.
pub const ENV_GUID: &str = "ABR_GUID";

/// Environment variable overriding the endpoint.
pub const ENV_ENDPOINT: &str = "ABR_ENDPOINT";

/// Settings for [`AbrClient`](super::AbrClient).
///
/// `Debug` redacts the GUID.
#[derive(Clone)]
pub struct AbrConfig {
    /// Authentication GUID issued on registration with the ABR.
    pub guid: String,
    /// Base URL, without the trailing page name.
    pub endpoint: String,
    pub timeout: Duration,
}

impl AbrConfig {
    /// Configuration for the public endpoint with the given GUID.
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the base URL (e.g. a mock server in tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `ABR_GUID` (required) and `ABR_ENDPOINT` (optional).
    pub fn from_env() -> Result<Self, AbrError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, AbrError> {
        let guid = get(ENV_GUID)
            .filter(|g| !g.trim().is_empty())
            .ok_or_else(|| AbrError::Config(format!("{ENV_GUID} is not set")))?;
        let mut config = Self::new(guid.trim());
        if let Some(endpoint) = get(ENV_ENDPOINT).filter(|e| !e.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), AbrError> {
        if self.guid.trim().is_empty() {
            return Err(AbrError::Config("GUID must not be empty".into()));
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(AbrError::Config(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for AbrConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbrConfig")
            .field("guid", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}
