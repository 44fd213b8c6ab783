//! Banking identifiers.

mod bsb;

pub use bsb::{BSB_LENGTH, Bsb, format_bsb, validate_bsb};
