#![no_main]

use auid::IdentifierKind;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for kind in IdentifierKind::ALL {
            // Must not panic, and the message is present iff invalid.
            let r = kind.validate(s);
            assert_eq!(r.is_valid(), r.message().is_none());
        }
    }
});
