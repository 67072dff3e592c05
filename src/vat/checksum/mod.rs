//! Check-digit strategies, one per country.
//!
//! Each strategy receives the body captured by its country rule (never the
//! prefix) and returns whether the embedded check digit(s) agree with the
//! rest of the number. They are grouped by algorithm family:
//!
//! - [`weighted`]: weighted positional sum reduced by one modulus
//! - [`cross_sum`]: weighted sum where two-digit products are folded (Luhn-like)
//! - [`iso7064`]: ISO 7064 MOD 11,10 running carry
//! - [`lookup`]: remainder mapped through a character table
//! - [`fallback`]: ordered sub-attempts inside a single country
//!
//! Strategies never panic; malformed bodies simply fail the check.

mod cross_sum;
mod fallback;
mod iso7064;
mod lookup;
mod weighted;

use serde::Serialize;

/// The check-digit algorithm attached to a country rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum Checksum {
    Austria,
    Belgium,
    Bulgaria,
    Switzerland,
    Cyprus,
    CzechRepublic,
    Germany,
    Denmark,
    Estonia,
    Greece,
    Spain,
    /// Non-Union OSS numbers carry no check digit.
    EuScheme,
    Finland,
    France,
    UnitedKingdom,
    Croatia,
    Hungary,
    Ireland,
    Italy,
    Latvia,
    Lithuania,
    Luxembourg,
    Malta,
    Netherlands,
    Norway,
    Poland,
    Portugal,
    Romania,
    Serbia,
    Sweden,
    Slovenia,
    Slovakia,
}

impl Checksum {
    /// Verify the check digits of `number`, the body captured by the rule.
    pub fn verify(self, number: &str) -> bool {
        match self {
            Self::Austria => cross_sum::austria(number),
            Self::Belgium => weighted::belgium(number),
            Self::Bulgaria => fallback::bulgaria(number),
            Self::Switzerland => weighted::switzerland(number),
            Self::Cyprus => lookup::cyprus(number),
            Self::CzechRepublic => fallback::czech_republic(number),
            Self::Germany | Self::Croatia | Self::Serbia => iso7064::mod_11_10(number),
            Self::Denmark => weighted::denmark(number),
            Self::Estonia => weighted::estonia(number),
            Self::Greece => weighted::greece(number),
            Self::Spain => lookup::spain(number),
            Self::EuScheme => true,
            Self::Finland => weighted::finland(number),
            Self::France => weighted::france(number),
            Self::UnitedKingdom => fallback::united_kingdom(number),
            Self::Hungary => weighted::hungary(number),
            Self::Ireland => lookup::ireland(number),
            Self::Italy => cross_sum::italy(number),
            Self::Latvia => weighted::latvia(number),
            Self::Lithuania => fallback::lithuania(number),
            Self::Luxembourg => weighted::luxembourg(number),
            Self::Malta => weighted::malta(number),
            Self::Netherlands => weighted::netherlands(number),
            Self::Norway => weighted::norway(number),
            Self::Poland => weighted::poland(number),
            Self::Portugal => weighted::portugal(number),
            Self::Romania => weighted::romania(number),
            Self::Sweden => cross_sum::sweden(number),
            Self::Slovenia => weighted::slovenia(number),
            Self::Slovakia => weighted::slovakia(number),
        }
    }
}

/// Decimal value of every character, or `None` if any is not an ASCII digit.
fn digits(number: &str) -> Option<Vec<u32>> {
    number.chars().map(|c| c.to_digit(10)).collect()
}

/// Integer value of an all-digit slice such as a two-digit check field.
fn value(digits: &[u32]) -> Option<u64> {
    if digits.is_empty() || digits.len() > 19 {
        return None;
    }
    Some(
        digits
            .iter()
            .fold(0u64, |acc, &d| acc * 10 + u64::from(d)),
    )
}

/// Integer value of `number[range]` when that slice is all digits.
fn value_at(number: &str, range: std::ops::Range<usize>) -> Option<u64> {
    value(&digits(number.get(range)?)?)
}

/// Σ weight × digit, pairing from the left and stopping at the shorter side.
fn weighted_sum(weights: &[u32], digits: &[u32]) -> u32 {
    weights.iter().zip(digits).map(|(w, d)| w * d).sum()
}
