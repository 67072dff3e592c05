//! Jurisdictions that issue the VAT identifiers recognised by the rule table.

use serde::{Deserialize, Serialize};

/// Relationship of a jurisdiction to the EU VAT area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Membership {
    /// EU member state (or Northern Ireland for goods, `XI`).
    EuMember,
    /// Identifiers issued under an EU-wide scheme (non-Union OSS, `EU` prefix).
    EuScheme,
    /// EFTA state.
    Efta,
    /// Neither EU nor EFTA.
    Other,
}

impl Membership {
    /// Whether identifiers of this kind belong to the EU VAT area.
    pub fn is_eu(self) -> bool {
        matches!(self, Self::EuMember | Self::EuScheme)
    }
}

/// A VAT-issuing jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Jurisdiction {
    /// Prefix as it appears on VAT identifiers (`EL` for Greece, `CHE` for Switzerland).
    pub code: &'static str,
    /// English short name.
    pub name: &'static str,
    /// EU/EFTA status.
    pub membership: Membership,
}

/// Look up a jurisdiction by its VAT prefix (exact, upper-case).
pub fn jurisdiction(code: &str) -> Option<&'static Jurisdiction> {
    JURISDICTIONS
        .binary_search_by(|j| j.code.cmp(code))
        .ok()
        .and_then(|i| JURISDICTIONS.get(i))
}

const fn j(code: &'static str, name: &'static str, membership: Membership) -> Jurisdiction {
    Jurisdiction {
        code,
        name,
        membership,
    }
}

use Membership::{Efta, EuMember, EuScheme, Other};

/// Sorted by code for binary search.
static JURISDICTIONS: &[Jurisdiction] = &[
    j("AT", "Austria", EuMember),
    j("BE", "Belgium", EuMember),
    j("BG", "Bulgaria", EuMember),
    j("CHE", "Switzerland", Efta),
    j("CY", "Cyprus", EuMember),
    j("CZ", "Czech Republic", EuMember),
    j("DE", "Germany", EuMember),
    j("DK", "Denmark", EuMember),
    j("EE", "Estonia", EuMember),
    j("EL", "Greece", EuMember),
    j("ES", "Spain", EuMember),
    j("EU", "EU non-Union OSS", EuScheme),
    j("FI", "Finland", EuMember),
    j("FR", "France", EuMember),
    j("GB", "United Kingdom", Other),
    j("GR", "Greece", EuMember),
    j("HR", "Croatia", EuMember),
    j("HU", "Hungary", EuMember),
    j("IE", "Ireland", EuMember),
    j("IT", "Italy", EuMember),
    j("LT", "Lithuania", EuMember),
    j("LU", "Luxembourg", EuMember),
    j("LV", "Latvia", EuMember),
    j("MT", "Malta", EuMember),
    j("NL", "Netherlands", EuMember),
    j("NO", "Norway", Efta),
    j("PL", "Poland", EuMember),
    j("PT", "Portugal", EuMember),
    j("RO", "Romania", EuMember),
    j("RS", "Serbia", Other),
    j("SE", "Sweden", EuMember),
    j("SI", "Slovenia", EuMember),
    j("SK", "Slovakia", EuMember),
    j("XI", "Northern Ireland", EuMember),
];
