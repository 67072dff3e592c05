//! The ordered country rule table.
//!
//! Every pattern captures two groups: the country prefix (group 1, optional
//! only for the domestic UK forms) and the body handed to the checksum
//! (group 2). Table order is the priority order: the first rule whose pattern
//! matches decides the outcome, even when a later rule would also match.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::checksum::Checksum;

/// One structural format for a jurisdiction's VAT identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryRule {
    /// Code reported for matches (`EL` and `GR` are both Greece).
    pub country_code: &'static str,
    /// Short label, used in trace output.
    pub description: &'static str,
    /// Anchored pattern with the prefix and body capture groups.
    pub pattern: &'static str,
    /// Check-digit algorithm applied to the body.
    pub checksum: Checksum,
}

const fn rule(
    country_code: &'static str,
    description: &'static str,
    pattern: &'static str,
    checksum: Checksum,
) -> CountryRule {
    CountryRule {
        country_code,
        description,
        pattern,
        checksum,
    }
}

// Priority list. Ambiguous groups, kept in this relative order:
// - ES: the two juridical forms, then the two personal forms.
// - FR: numeric key first, then the three alphabetic-key forms.
// - GB: standard 9 digits, branch 12 digits, GD government, HA health
//   authority. All four also match without a prefix.
// - EL before GR; the GR form additionally accepts 8 digits.
static RULES: &[CountryRule] = &[
    rule("AT", "Austria", r"^(AT)U([0-9]{8})$", Checksum::Austria),
    rule("BE", "Belgium", r"^(BE)(0?[0-9]{9})$", Checksum::Belgium),
    rule("BG", "Bulgaria", r"^(BG)([0-9]{9,10})$", Checksum::Bulgaria),
    rule("CHE", "Switzerland", r"^(CHE)([0-9]{9})MWST$", Checksum::Switzerland),
    rule("CY", "Cyprus", r"^(CY)([0-59][0-9]{7}[A-Z])$", Checksum::Cyprus),
    rule("CZ", "Czech Republic", r"^(CZ)([0-9]{8,13})$", Checksum::CzechRepublic),
    rule("DE", "Germany", r"^(DE)([1-9][0-9]{8})$", Checksum::Germany),
    rule("DK", "Denmark", r"^(DK)([0-9]{8})$", Checksum::Denmark),
    rule("EE", "Estonia", r"^(EE)(10[0-9]{7})$", Checksum::Estonia),
    rule("EL", "Greece", r"^(EL)([0-9]{9})$", Checksum::Greece),
    rule("ES", "Spain (national juridical entities)", r"^(ES)([A-Z][0-9]{8})$", Checksum::Spain),
    rule("ES", "Spain (other juridical entities)", r"^(ES)([A-HN-SW][0-9]{7}[A-J])$", Checksum::Spain),
    rule("ES", "Spain (personal entities, type 1)", r"^(ES)([0-9YZ][0-9]{7}[A-Z])$", Checksum::Spain),
    rule("ES", "Spain (personal entities, type 2)", r"^(ES)([KLMX][0-9]{7}[A-Z])$", Checksum::Spain),
    rule("EU", "EU OSS scheme", r"^(EU)([0-9]{9})$", Checksum::EuScheme),
    rule("FI", "Finland", r"^(FI)([0-9]{8})$", Checksum::Finland),
    rule("FR", "France (numeric key)", r"^(FR)([0-9]{11})$", Checksum::France),
    rule("FR", "France (alphabetic key)", r"^(FR)([A-HJ-NP-Z][0-9]{10})$", Checksum::France),
    rule("FR", "France (digit and letter key)", r"^(FR)([0-9][A-HJ-NP-Z][0-9]{9})$", Checksum::France),
    rule("FR", "France (two-letter key)", r"^(FR)([A-HJ-NP-Z]{2}[0-9]{9})$", Checksum::France),
    rule("GB", "United Kingdom (standard)", r"^(GB)?([0-9]{9})$", Checksum::UnitedKingdom),
    rule("GB", "United Kingdom (branch)", r"^(GB)?([0-9]{12})$", Checksum::UnitedKingdom),
    rule("GB", "United Kingdom (government department)", r"^(GB)?(GD[0-9]{3})$", Checksum::UnitedKingdom),
    rule("GB", "United Kingdom (health authority)", r"^(GB)?(HA[0-9]{3})$", Checksum::UnitedKingdom),
    rule("XI", "Northern Ireland (standard)", r"^(XI)([0-9]{9})$", Checksum::UnitedKingdom),
    rule("XI", "Northern Ireland (branch)", r"^(XI)([0-9]{12})$", Checksum::UnitedKingdom),
    rule("GR", "Greece", r"^(GR)([0-9]{8,9})$", Checksum::Greece),
    rule("HR", "Croatia", r"^(HR)([0-9]{11})$", Checksum::Croatia),
    rule("HU", "Hungary", r"^(HU)([0-9]{8})$", Checksum::Hungary),
    rule("IE", "Ireland", r"^(IE)([0-9]{7}[A-W])$", Checksum::Ireland),
    rule("IE", "Ireland (old form)", r"^(IE)([7-9][A-Z*+][0-9]{5}[A-W])$", Checksum::Ireland),
    rule("IE", "Ireland (two-letter form)", r"^(IE)([0-9]{7}[A-Z][AH])$", Checksum::Ireland),
    rule("IT", "Italy", r"^(IT)([0-9]{11})$", Checksum::Italy),
    rule("LV", "Latvia", r"^(LV)([0-9]{11})$", Checksum::Latvia),
    rule("LT", "Lithuania", r"^(LT)([0-9]{9}|[0-9]{12})$", Checksum::Lithuania),
    rule("LU", "Luxembourg", r"^(LU)([0-9]{8})$", Checksum::Luxembourg),
    rule("MT", "Malta", r"^(MT)([1-9][0-9]{7})$", Checksum::Malta),
    rule("NL", "Netherlands", r"^(NL)([0-9]{9})B[0-9]{2}$", Checksum::Netherlands),
    rule("NO", "Norway", r"^(NO)([0-9]{9})$", Checksum::Norway),
    rule("PL", "Poland", r"^(PL)([0-9]{10})$", Checksum::Poland),
    rule("PT", "Portugal", r"^(PT)([0-9]{9})$", Checksum::Portugal),
    rule("RO", "Romania", r"^(RO)([1-9][0-9]{1,9})$", Checksum::Romania),
    rule("RS", "Serbia", r"^(RS)([0-9]{9})$", Checksum::Serbia),
    rule("SI", "Slovenia", r"^(SI)([1-9][0-9]{7})$", Checksum::Slovenia),
    rule("SK", "Slovakia", r"^(SK)([1-9][0-9][2-46-9][0-9]{7})$", Checksum::Slovakia),
    rule("SE", "Sweden", r"^(SE)([0-9]{10}01)$", Checksum::Sweden),
];

/// All rules in priority order.
pub fn rules() -> &'static [CountryRule] {
    RULES
}

/// A rule together with its compiled pattern.
pub(crate) struct CompiledRule {
    pub(crate) rule: &'static CountryRule,
    pub(crate) regex: Regex,
}

/// Compiled once, in table order. A pattern that fails to compile is
/// logged and left out rather than taking the whole table down.
pub(crate) static COMPILED: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    RULES
        .iter()
        .filter_map(|rule| match Regex::new(rule.pattern) {
            Ok(regex) => Some(CompiledRule { rule, regex }),
            Err(err) => {
                tracing::error!(
                    country = rule.country_code,
                    rule = rule.description,
                    error = %err,
                    "built-in VAT pattern failed to compile"
                );
                None
            }
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(COMPILED.len(), RULES.len());
        for compiled in COMPILED.iter() {
            assert_eq!(
                compiled.regex.captures_len(),
                3,
                "{} must capture prefix and body",
                compiled.rule.description
            );
        }
    }

    #[test]
    fn every_rule_is_anchored_and_uses_ascii_digits() {
        for rule in RULES {
            assert!(rule.pattern.starts_with('^') && rule.pattern.ends_with('$'));
            assert!(!rule.pattern.contains(r"\d"), "{}", rule.description);
        }
    }

    #[test]
    fn ambiguous_groups_keep_their_order() {
        let labels: Vec<_> = RULES
            .iter()
            .filter(|r| r.country_code == "GB")
            .map(|r| r.description)
            .collect();
        assert_eq!(
            labels,
            [
                "United Kingdom (standard)",
                "United Kingdom (branch)",
                "United Kingdom (government department)",
                "United Kingdom (health authority)",
            ]
        );

        let position = |code: &str| RULES.iter().position(|r| r.country_code == code);
        assert!(position("EL") < position("GR"));
        assert_eq!(RULES.iter().filter(|r| r.country_code == "FR").count(), 4);
        assert_eq!(RULES.iter().filter(|r| r.country_code == "ES").count(), 4);
        assert_eq!(RULES.first().map(|r| r.country_code), Some("AT"));
        assert_eq!(RULES.last().map(|r| r.country_code), Some("SE"));
    }

    #[test]
    fn every_code_has_jurisdiction_metadata() {
        for rule in RULES {
            assert!(
                crate::core::jurisdiction(rule.country_code).is_some(),
                "{}",
                rule.country_code
            );
        }
    }

    #[test]
    fn only_uk_forms_allow_a_missing_prefix() {
        for compiled in COMPILED.iter() {
            let bare = compiled.rule.pattern.contains(")?(");
            assert_eq!(bare, compiled.rule.country_code == "GB");
        }
    }
}
