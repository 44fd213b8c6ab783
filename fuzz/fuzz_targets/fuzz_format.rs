#![no_main]

use auid::IdentifierKind;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for kind in IdentifierKind::ALL {
            let formatted = kind.format(s);
            assert_eq!(
                kind.validate(&formatted).is_valid(),
                kind.validate(s).is_valid(),
                "formatting changed validity of {s:?} ({kind})"
            );
        }
    }
});
