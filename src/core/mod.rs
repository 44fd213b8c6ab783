//! Shared result and error types, identifier kinds and digit helpers.
//!
//! Every identifier module cleans its input with [`clean_digits`] first and
//! reports failures as an [`IdentifierError`], folded into a
//! [`ValidationResult`] at the public boundary.

pub(crate) mod digits;
mod error;
mod kind;
mod result;

pub use digits::clean_digits;
pub use error::*;
pub use kind::*;
pub use result::*;
