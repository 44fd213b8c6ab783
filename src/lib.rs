//! # auid
//!
//! Validation and formatting for Australian business and banking identifiers:
//! ABN, ACN, TFN, BSB, phone numbers and postcodes.
//!
//! Every validator returns a [`ValidationResult`] with the two-field shape
//! `{ isValid, message? }` that form code expects, while keeping the typed
//! [`IdentifierError`] underneath for exhaustive matching. Formatters are
//! best-effort: input with the wrong digit count comes back unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use auid::*;
//!
//! assert!(validate_abn("51 824 753 556").is_valid());
//! assert_eq!(format_abn("51824753556"), "51 824 753 556");
//!
//! let result = validate_abn("1234567890");
//! assert_eq!(result.kind(), Some(ErrorKind::Length));
//! assert_eq!(result.message(), Some("ABN must be 11 digits"));
//!
//! assert_eq!(format_phone("0412345678"), "+61 412 345 678");
//! assert_eq!(format_bsb("062000"), "062-000");
//!
//! let acn: Acn = "004 085 616".parse().unwrap();
//! assert_eq!(Abn::from_acn(&acn).to_string(), "53 004 085 616");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Validators, formatters, typed identifiers |
//! | `abr` | ABN Lookup web-service client |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod business;

#[cfg(feature = "core")]
pub mod banking;

#[cfg(feature = "core")]
pub mod contact;

#[cfg(feature = "core")]
mod identifier;

#[cfg(feature = "abr")]
pub mod abr;

// Re-export the validators at crate root for convenience
#[cfg(feature = "core")]
pub use crate::banking::*;
#[cfg(feature = "core")]
pub use crate::business::*;
#[cfg(feature = "core")]
pub use crate::contact::*;
#[cfg(feature = "core")]
pub use crate::core::*;
#[cfg(feature = "core")]
pub use crate::identifier::validate_fields;
