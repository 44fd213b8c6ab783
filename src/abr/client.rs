//! HTTP client for the ABN Lookup JSON web services.

use super::config::AbrConfig;
use super::error::AbrError;
use super::types::{AbnDetails, AbrApiResponse, strip_jsonp};
use crate::business::{Abn, Acn};

const ABN_DETAILS_PAGE: &str = "AbnDetails.aspx";
const ACN_DETAILS_PAGE: &str = "AcnDetails.aspx";

/// Async ABN Lookup client.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct AbrClient {
    http: reqwest::Client,
    config: AbrConfig,
}

impl AbrClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// `AbrError::Config` if the GUID is empty or the endpoint is not an
    /// http(s) URL.
    pub fn new(config: AbrConfig) -> Result<Self, AbrError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AbrError::Config(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AbrConfig {
        &self.config
    }

    /// Look up the register entry for an ABN.
    ///
    /// # Errors
    ///
    /// `AbrError::NotFound` if the ABN is not registered,
    /// `AbrError::Api` if the service reports an error (e.g. unknown GUID),
    /// `AbrError::Http` / `AbrError::Status` on transport failures.
    pub async fn lookup_abn(&self, abn: &Abn) -> Result<AbnDetails, AbrError> {
        self.fetch(ABN_DETAILS_PAGE, "abn", abn.as_str()).await
    }

    /// Look up the register entry for the company with this ACN.
    pub async fn lookup_acn(&self, acn: &Acn) -> Result<AbnDetails, AbrError> {
        self.fetch(ACN_DETAILS_PAGE, "acn", acn.as_str()).await
    }

    async fn fetch(&self, page: &str, param: &str, value: &str) -> Result<AbnDetails, AbrError> {
        let url = format!("{}/{page}", self.config.endpoint.trim_end_matches('/'));
        tracing::debug!(page, %value, "ABN Lookup request");

        let resp = self
            .http
            .get(&url)
            .query(&[
                (param, value),
                ("guid", self.config.guid.as_str()),
                ("callback", "callback"),
            ])
            .send()
            .await
            .map_err(|source| AbrError::Http {
                endpoint: page.to_string(),
                source,
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|source| AbrError::Http {
            endpoint: page.to_string(),
            source,
        })?;
        tracing::debug!(page, status = status.as_u16(), "ABN Lookup response");

        if !status.is_success() {
            return Err(AbrError::Status {
                endpoint: page.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let api_resp: AbrApiResponse = serde_json::from_str(strip_jsonp(&body)?)
            .map_err(|e| AbrError::Parse(e.to_string()))?;

        if let Some(msg) = api_resp.error_message() {
            tracing::warn!(page, %value, "ABN Lookup returned an error: {msg}");
        }
        api_resp.into_details()
    }
}
