#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, u32, u8)| {
    let (digits, modulus, chunk) = input;
    let default = vatid::mod_large(digits, modulus);
    let chunked = vatid::mod_large_chunked(digits, modulus, usize::from(chunk));
    if chunk > 0 {
        assert_eq!(default, chunked);
    }
    if let Some(r) = default {
        assert!(r < modulus);
    }
});
