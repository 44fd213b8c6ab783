use auid::*;

fn main() {
    println!("=== Identifier Validation ===\n");

    let inputs = [
        (IdentifierKind::Abn, "51824753556"),
        (IdentifierKind::Abn, "1234567890"),   // 10 digits
        (IdentifierKind::Abn, "00000000000"),  // checksum
        (IdentifierKind::Acn, "123 456 780"),
        (IdentifierKind::Bsb, "062000"),
        (IdentifierKind::Tfn, "123456789"),    // checksum
        (IdentifierKind::Phone, "0412345678"),
        (IdentifierKind::Phone, "555 1234"),   // not Australian
        (IdentifierKind::Postcode, "2000"),
        (IdentifierKind::Postcode, "0100"),    // below range
    ];

    for (kind, raw) in inputs {
        let result = kind.validate(raw);
        match result.message() {
            None => println!("  {kind:<12} {raw:<16} => valid, formatted: {}", kind.format(raw)),
            Some(msg) => println!("  {kind:<12} {raw:<16} => INVALID: {msg}"),
        }
    }

    println!("\n=== Company ABN from ACN ===\n");

    let acn: Acn = "004 085 616".parse().expect("valid ACN");
    let abn = Abn::from_acn(&acn);
    println!("  ACN {acn} => ABN {abn}");

    println!("\n=== Postcode States ===\n");

    for raw in ["2000", "2600", "3000", "0800", "0500"] {
        let pc = Postcode::parse(raw).expect("valid postcode");
        let state = pc.state().map(|s| s.name()).unwrap_or("unallocated");
        println!("  {pc} => {state}");
    }

    println!("\n=== Onboarding Form ===\n");

    let errors = validate_fields([
        ("business.abn", IdentifierKind::Abn, "51 824 753 556"),
        ("bank.bsb", IdentifierKind::Bsb, "06200"),
        ("contact.phone", IdentifierKind::Phone, "0412 345 678"),
    ]);
    for e in &errors {
        println!("  {e}");
    }
}
