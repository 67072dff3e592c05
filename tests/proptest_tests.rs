//! Property-based tests for the validator and the modulus helper.
//!
//! Run with: `cargo test --test proptest_tests`

use proptest::prelude::*;
use vatid::vat::{normalize, validate};
use vatid::{ErrorReason, mod_large, mod_large_chunked};

/// Strings shaped like VAT identifiers: a prefix from the table and a body of
/// digits and letters, so the rule patterns and checksums are exercised.
fn arb_vat_like() -> impl Strategy<Value = String> {
    let prefix = prop::sample::select(vec![
        "", "AT", "ATU", "BE", "BG", "CHE", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "EU", "FI",
        "FR", "GB", "GBGD", "GBHA", "XI", "GR", "HR", "HU", "IE", "IT", "LV", "LT", "LU", "MT",
        "NL", "NO", "PL", "PT", "RO", "RS", "SI", "SK", "SE",
    ]);
    (prefix, "[0-9A-Z*+]{0,14}").prop_map(|(p, body)| format!("{p}{body}"))
}

proptest! {
    /// Arbitrary text never panics and always yields a consistent result.
    #[test]
    fn validate_never_panics(input in any::<String>()) {
        let result = validate(&input);
        prop_assert_eq!(result.valid, result.reason.is_none());
        if result.country_code.is_none() {
            prop_assert_eq!(result.reason, Some(ErrorReason::InvalidFormat));
        }
    }

    /// Identifier-shaped input keeps the result invariants too.
    #[test]
    fn vat_like_results_are_consistent(input in arb_vat_like()) {
        let result = validate(&input);
        match result.reason {
            None => prop_assert!(result.valid && result.country_code.is_some()),
            Some(ErrorReason::ChecksumFailed) => {
                prop_assert!(!result.valid);
                prop_assert!(result.country_code.is_some());
                prop_assert!(result.local_number.is_some());
            }
            Some(ErrorReason::InvalidFormat) => {
                prop_assert!(!result.valid);
                prop_assert!(result.country_code.is_none());
            }
        }
    }

    /// Validating the normalized form gives the same result.
    #[test]
    fn normalization_is_idempotent(input in arb_vat_like(), pad in "[ \t]{0,3}") {
        let raw = format!("{pad}{}{pad}", input.to_lowercase());
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert_eq!(validate(&raw), validate(&once));
    }

    /// The reported country and local number reassemble the normalized input.
    #[test]
    fn local_number_follows_prefix(input in arb_vat_like()) {
        let result = validate(&input);
        if let (Some(country), Some(local)) = (result.country_code, result.local_number) {
            let normalized = normalize(&input);
            prop_assert!(normalized.ends_with(&local));
            let prefixed = format!("{country}{local}");
            prop_assert!(normalized == local || normalized == prefixed);
        }
    }

    /// `mod_large` agrees with native arithmetic wherever native arithmetic fits.
    #[test]
    fn mod_large_matches_native(n in any::<u64>(), m in 1u32..=u32::MAX) {
        prop_assert_eq!(mod_large(&n.to_string(), m), Some((n % u64::from(m)) as u32));
    }

    /// The chunk size never changes the result.
    #[test]
    fn chunk_size_is_irrelevant(digits in "[0-9]{1,40}", m in 1u32..1000, chunk in 1usize..=18) {
        prop_assert_eq!(
            mod_large_chunked(&digits, m, chunk),
            mod_large_chunked(&digits, m, 1)
        );
    }

    /// French numeric keys: the 11-digit body reduced with u64 arithmetic and
    /// with `mod_large` gives the same key, and the validator agrees with both.
    #[test]
    fn french_key_native_and_chunked_agree(siren in 0u64..1_000_000_000) {
        let native = (siren * 100 + 12) % 97;
        let chunked = mod_large(&format!("{siren:09}12"), 97);
        prop_assert_eq!(chunked, Some(native as u32));

        let id = format!("FR{native:02}{siren:09}");
        prop_assert!(validate(&id).valid, "{}", id);
        let wrong = format!("FR{:02}{siren:09}", (native + 1) % 97);
        prop_assert!(!validate(&wrong).valid, "{}", wrong);
    }
}
