//! Business and tax identifiers: ABN, ACN and TFN.
//!
//! All three are self-checking: a weighted digit sum detects most
//! single-digit typos and transpositions without any registry lookup.
//!
//! # Example
//!
//! ```
//! use auid::business::*;
//!
//! assert!(validate_abn("51 824 753 556").is_valid());
//! assert!(validate_acn("123 456 780").is_valid());
//! assert!(!validate_tfn("123456789").is_valid());
//!
//! let acn = Acn::parse("004085616").unwrap();
//! let abn = Abn::from_acn(&acn);
//! assert!(acn.matches_abn(&abn));
//! ```

mod abn;
mod acn;
mod tfn;

pub use abn::{ABN_LENGTH, ABN_WEIGHTS, Abn, format_abn, validate_abn};
pub use acn::{ACN_LENGTH, ACN_WEIGHTS, Acn, format_acn, validate_acn};
pub use tfn::{TFN_LENGTH, TFN_WEIGHTS, Tfn, format_tfn, validate_tfn};
