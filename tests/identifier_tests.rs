#![cfg(feature = "core")]

use auid::*;

// ---------------------------------------------------------------------------
// ABN
// ---------------------------------------------------------------------------

#[test]
fn abn_known_good() {
    assert!(validate_abn("51824753556").is_valid());
    assert!(validate_abn("53004085616").is_valid());
}

#[test]
fn abn_formatted() {
    insta::assert_snapshot!(format_abn("51824753556"), @"51 824 753 556");
}

#[test]
fn abn_ten_digits_is_length_error() {
    let r = validate_abn("1234567890");
    assert!(!r.is_valid());
    assert_eq!(r.kind(), Some(ErrorKind::Length));
    assert_eq!(r.message(), Some("ABN must be 11 digits"));
}

#[test]
fn abn_accepts_common_input_shapes() {
    for raw in [
        "51 824 753 556",
        "51-824-753-556",
        "ABN 51824753556",
        " 51824753556\t",
    ] {
        assert!(validate_abn(raw).is_valid(), "{raw:?}");
    }
}

#[test]
fn abn_all_zeros_rejected() {
    let r = validate_abn("00000000000");
    assert_eq!(r.kind(), Some(ErrorKind::Checksum));
    assert_eq!(r.message(), Some("Invalid ABN checksum"));
}

#[test]
fn abn_transposition_detected() {
    // 51824753556 with the fourth and fifth digits swapped
    assert_eq!(
        validate_abn("51842753556").kind(),
        Some(ErrorKind::Checksum)
    );
}

#[test]
fn abn_typed_round_trip() {
    let abn: Abn = "51 824 753 556".parse().unwrap();
    assert_eq!(abn.as_str(), "51824753556");
    insta::assert_snapshot!(abn.to_string(), @"51 824 753 556");
}

#[test]
fn company_abn_from_acn() {
    let acn: Acn = "004 085 616".parse().unwrap();
    let abn = Abn::from_acn(&acn);
    assert_eq!(abn.as_str(), "53004085616");
    assert_eq!(abn.embedded_acn(), Some(acn));
}

// ---------------------------------------------------------------------------
// ACN
// ---------------------------------------------------------------------------

#[test]
fn acn_known_good() {
    assert!(validate_acn("123456780").is_valid());
    insta::assert_snapshot!(format_acn("123456780"), @"123 456 780");
}

#[test]
fn acn_check_digit_mismatch() {
    let r = validate_acn("123456781");
    assert_eq!(r.kind(), Some(ErrorKind::Checksum));
    assert_eq!(r.message(), Some("Invalid ACN checksum"));
}

#[test]
fn acn_format_wrong_length_unchanged() {
    assert_eq!(format_acn("12345678"), "12345678");
}

// ---------------------------------------------------------------------------
// BSB
// ---------------------------------------------------------------------------

#[test]
fn bsb_known_good() {
    assert!(validate_bsb("062000").is_valid());
    assert!(validate_bsb("032002").is_valid());
    insta::assert_snapshot!(format_bsb("062000"), @"062-000");
    insta::assert_snapshot!(format_bsb("032002"), @"032-002");
}

#[test]
fn bsb_has_no_checksum() {
    assert!(validate_bsb("999999").is_valid());
}

#[test]
fn bsb_wrong_length() {
    assert_eq!(validate_bsb("0620000").message(), Some("BSB must be 6 digits"));
}

// ---------------------------------------------------------------------------
// TFN
// ---------------------------------------------------------------------------

#[test]
fn tfn_known_good() {
    assert!(validate_tfn("123 456 782").is_valid());
    insta::assert_snapshot!(format_tfn("123456782"), @"123 456 782");
}

#[test]
fn tfn_checksum() {
    assert_eq!(validate_tfn("123456789").message(), Some("Invalid TFN checksum"));
}

// ---------------------------------------------------------------------------
// Phone
// ---------------------------------------------------------------------------

#[test]
fn phone_known_good() {
    assert!(validate_phone("0412345678").is_valid());
    insta::assert_snapshot!(format_phone("0412345678"), @"+61 412 345 678");
}

#[test]
fn phone_international_input_regrouped() {
    insta::assert_snapshot!(format_phone("+61412345678"), @"+61 412 345 678");
}

#[test]
fn phone_kind() {
    let p: PhoneNumber = "02 9876 5432".parse().unwrap();
    assert_eq!(p.kind(), PhoneKind::Landline);
    let p: PhoneNumber = "+61 412 345 678".parse().unwrap();
    assert_eq!(p.kind(), PhoneKind::Mobile);
    assert_eq!(p.to_local(), "0412 345 678");
}

#[test]
fn phone_invalid_message() {
    let r = validate_phone("555-1234");
    assert_eq!(r.kind(), Some(ErrorKind::Format));
    assert_eq!(
        r.message(),
        Some("Invalid Australian phone number. Format: 04XX XXX XXX or +61 4XX XXX XXX")
    );
}

// ---------------------------------------------------------------------------
// Postcode
// ---------------------------------------------------------------------------

#[test]
fn postcode_sydney_valid() {
    assert!(validate_postcode("2000").is_valid());
    assert_eq!(Postcode::parse("2000").unwrap().state(), Some(State::Nsw));
}

#[test]
fn postcode_below_range_invalid() {
    let r = validate_postcode("0100");
    assert_eq!(r.kind(), Some(ErrorKind::Range));
    assert_eq!(r.message(), Some("Invalid Australian postcode"));
}

#[test]
fn postcode_unallocated_still_valid() {
    let pc = Postcode::parse("0500").unwrap();
    assert!(pc.state().is_none());
}

// ---------------------------------------------------------------------------
// Result shape and dispatch
// ---------------------------------------------------------------------------

#[test]
fn result_json_shape() {
    let ok = serde_json::to_value(validate_abn("51824753556")).unwrap();
    assert_eq!(ok, serde_json::json!({ "isValid": true }));

    let bad = serde_json::to_value(validate_postcode("0100")).unwrap();
    assert_eq!(
        bad,
        serde_json::json!({ "isValid": false, "message": "Invalid Australian postcode" })
    );
}

#[test]
fn typed_error_is_exhaustively_matchable() {
    let describe = |r: ValidationResult| match r.error() {
        None => "ok",
        Some(e) => match e.kind() {
            ErrorKind::Length => "length",
            ErrorKind::Checksum => "checksum",
            ErrorKind::Format => "format",
            ErrorKind::Range => "range",
        },
    };
    assert_eq!(describe(validate_abn("51824753556")), "ok");
    assert_eq!(describe(validate_abn("123")), "length");
    assert_eq!(describe(validate_tfn("123456789")), "checksum");
    assert_eq!(describe(validate_phone("123")), "format");
    assert_eq!(describe(validate_postcode("0001")), "range");
}

#[test]
fn staff_payroll_form() {
    let errors = validate_fields([
        ("staff.tfn", IdentifierKind::Tfn, "123 456 782"),
        ("staff.bank.bsb", IdentifierKind::Bsb, "062-000"),
        ("staff.mobile", IdentifierKind::Phone, "0412 345 67"),
        ("staff.address.postcode", IdentifierKind::Postcode, "3000"),
    ]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "staff.mobile");
    assert_eq!(errors[0].kind, ErrorKind::Format);
}

#[test]
fn kind_from_field_type_name() {
    let kind: IdentifierKind = "abn".parse().unwrap();
    assert_eq!(kind.format("53004085616"), "53 004 085 616");
}
