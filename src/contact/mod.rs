//! Contact details: phone numbers and postcodes.

mod phone;
mod postcode;

pub use phone::{AU_COUNTRY_PREFIX, PhoneKind, PhoneNumber, format_phone, validate_phone};
pub use postcode::{
    POSTCODE_LENGTH, POSTCODE_MAX, POSTCODE_MIN, Postcode, State, UnknownState, validate_postcode,
};
