//! ABN Lookup (Australian Business Register) web-service client.
//!
//! Format validation needs no network; this module confirms that an ABN or
//! ACN is actually registered and fetches the entity details. A GUID from
//! the ABR registration page is required.
//!
//! # Example
//!
//! ```ignore
//! use auid::abr::*;
//! use auid::Abn;
//!
//! let client = AbrClient::new(AbrConfig::from_env()?)?;
//! let details = client.lookup_abn(&Abn::parse("51 824 753 556")?).await?;
//! println!("{} ({})", details.entity_name, details.status);
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::AbrClient;
pub use config::{AbrConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, ENV_ENDPOINT, ENV_GUID};
pub use error::AbrError;
pub use types::{AbnDetails, AbnStatus};
