#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and the result must be self-consistent.
        let result = vatid::validate(s);
        assert_eq!(result.valid, result.reason.is_none());
        if result.country_code.is_none() {
            assert!(!result.valid);
        }
        let _ = s.parse::<vatid::VatId>();
    }
});
