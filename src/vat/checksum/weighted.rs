//! Weighted positional sums reduced by a single modulus.

use std::cmp::Ordering;

use super::{digits, value, value_at, weighted_sum};
use crate::core::mod_large;

/// How the reduced sum `r = Σ wᵢdᵢ mod m` becomes the expected check value.
#[derive(Debug, Clone, Copy)]
pub(super) enum Residue {
    /// The check digit is inside the weighted run and `r` must be 0.
    Zero,
    /// `r`, with 10 mapped to 0.
    RemainderOrZero,
    /// `m - r`, with 10 and 11 mapped to 0.
    ComplementOrZero,
    /// `m - r`, with 11 mapped to 0; a complement of 10 has no valid check digit.
    ComplementRejectTen,
    /// Last decimal digit of `m - r` (so 10 → 0, 11 → 1).
    ComplementLastDigit,
    /// `m - r` compared as a whole against a multi-digit check field.
    Complement,
}

/// A weight vector, modulus and residue rule.
///
/// The first `weights.len()` digits are weighted; the remaining digits form
/// the check value (except for [`Residue::Zero`], which has none).
#[derive(Debug, Clone, Copy)]
pub(super) struct WeightedSum {
    weights: &'static [u32],
    modulus: u32,
    residue: Residue,
}

impl WeightedSum {
    const fn new(weights: &'static [u32], modulus: u32, residue: Residue) -> Self {
        Self {
            weights,
            modulus,
            residue,
        }
    }

    /// Expected check value for `body`, or `None` when no check value can satisfy the rule.
    fn expected(&self, body: &[u32]) -> Option<u64> {
        let m = self.modulus;
        let r = weighted_sum(self.weights, body) % m;
        let check = match self.residue {
            Residue::Zero => return (r == 0).then_some(0),
            Residue::RemainderOrZero => {
                if r > 9 {
                    0
                } else {
                    r
                }
            }
            Residue::ComplementOrZero => {
                if m - r > 9 {
                    0
                } else {
                    m - r
                }
            }
            Residue::ComplementRejectTen => match m - r {
                10 => return None,
                11 => 0,
                c => c,
            },
            Residue::ComplementLastDigit => (m - r) % 10,
            Residue::Complement => m - r,
        };
        Some(u64::from(check))
    }

    pub(super) fn verify_digits(&self, ds: &[u32]) -> bool {
        if ds.len() < self.weights.len() {
            return false;
        }
        let (body, check) = ds.split_at(self.weights.len());
        match self.residue {
            Residue::Zero => self.expected(body).is_some(),
            _ => match (self.expected(body), value(check)) {
                (Some(expected), Some(actual)) => expected == actual,
                _ => false,
            },
        }
    }

    pub(super) fn verify(&self, number: &str) -> bool {
        digits(number).is_some_and(|ds| self.verify_digits(&ds))
    }
}

const DENMARK: WeightedSum = WeightedSum::new(&[2, 7, 6, 5, 4, 3, 2, 1], 11, Residue::Zero);
const ESTONIA: WeightedSum =
    WeightedSum::new(&[3, 7, 1, 3, 7, 1, 3, 7], 10, Residue::ComplementLastDigit);
const HUNGARY: WeightedSum =
    WeightedSum::new(&[9, 7, 3, 1, 9, 7, 3], 10, Residue::ComplementLastDigit);
const GREECE: WeightedSum = WeightedSum::new(
    &[256, 128, 64, 32, 16, 8, 4, 2],
    11,
    Residue::RemainderOrZero,
);
const NETHERLANDS: WeightedSum =
    WeightedSum::new(&[9, 8, 7, 6, 5, 4, 3, 2], 11, Residue::RemainderOrZero);
const POLAND: WeightedSum =
    WeightedSum::new(&[6, 5, 7, 2, 3, 4, 5, 6, 7], 11, Residue::RemainderOrZero);
const FINLAND: WeightedSum =
    WeightedSum::new(&[7, 9, 10, 5, 8, 4, 2], 11, Residue::ComplementOrZero);
const PORTUGAL: WeightedSum =
    WeightedSum::new(&[9, 8, 7, 6, 5, 4, 3, 2], 11, Residue::ComplementOrZero);
const SLOVENIA: WeightedSum =
    WeightedSum::new(&[8, 7, 6, 5, 4, 3, 2], 11, Residue::ComplementOrZero);
const SWITZERLAND: WeightedSum =
    WeightedSum::new(&[5, 4, 3, 2, 7, 6, 5, 4], 11, Residue::ComplementRejectTen);
const NORWAY: WeightedSum =
    WeightedSum::new(&[3, 2, 7, 6, 5, 4, 3, 2], 11, Residue::ComplementRejectTen);
const MALTA: WeightedSum = WeightedSum::new(&[3, 4, 6, 7, 8, 9], 37, Residue::Complement);

/// Czech legal entities (8 digits).
pub(super) const CZECH_LEGAL: WeightedSum =
    WeightedSum::new(&[8, 7, 6, 5, 4, 3, 2], 11, Residue::ComplementLastDigit);

/// Bulgarian "miscellaneous" 10-digit numbers, the last attempt for that length.
pub(super) const BULGARIA_MISC: WeightedSum = WeightedSum::new(
    &[4, 3, 2, 7, 6, 5, 4, 3, 2],
    11,
    Residue::ComplementRejectTen,
);

const LATVIA_WEIGHTS: [u32; 10] = [9, 1, 4, 8, 3, 10, 2, 5, 7, 6];
const ROMANIA_WEIGHTS: [u32; 10] = [7, 5, 3, 2, 1, 7, 5, 3, 2, 1];

pub(super) fn denmark(number: &str) -> bool {
    DENMARK.verify(number)
}

pub(super) fn estonia(number: &str) -> bool {
    ESTONIA.verify(number)
}

pub(super) fn hungary(number: &str) -> bool {
    HUNGARY.verify(number)
}

pub(super) fn netherlands(number: &str) -> bool {
    NETHERLANDS.verify(number)
}

pub(super) fn poland(number: &str) -> bool {
    POLAND.verify(number)
}

pub(super) fn finland(number: &str) -> bool {
    FINLAND.verify(number)
}

pub(super) fn portugal(number: &str) -> bool {
    PORTUGAL.verify(number)
}

pub(super) fn slovenia(number: &str) -> bool {
    SLOVENIA.verify(number)
}

pub(super) fn switzerland(number: &str) -> bool {
    SWITZERLAND.verify(number)
}

pub(super) fn norway(number: &str) -> bool {
    NORWAY.verify(number)
}

pub(super) fn malta(number: &str) -> bool {
    MALTA.verify(number)
}

/// Greek numbers; the 8-digit `GR` form is left-padded to 9 digits.
pub(super) fn greece(number: &str) -> bool {
    if number.len() == 8 {
        GREECE.verify(&format!("0{number}"))
    } else {
        GREECE.verify(number)
    }
}

/// `97 - (first eight digits mod 97)` equals the last two digits.
/// Nine-digit numbers are the old form without the leading 0.
pub(super) fn belgium(number: &str) -> bool {
    let padded;
    let number = if number.len() == 9 {
        padded = format!("0{number}");
        &padded
    } else {
        number
    };
    match (value_at(number, 0..8), value_at(number, 8..10)) {
        (Some(body), Some(check)) => 97 - body % 97 == check,
        _ => false,
    }
}

/// The first six digits mod 89 equal the last two.
pub(super) fn luxembourg(number: &str) -> bool {
    match (value_at(number, 0..6), value_at(number, 6..8)) {
        (Some(body), Some(check)) => body % 89 == check,
        _ => false,
    }
}

/// Numeric-key French numbers: the two-digit key equals
/// `(SIREN × 100 + 12) mod 97`, computed on the string `SIREN ‖ "12"`.
///
/// Bodies with an alphabetic key (anything but 11 digits) pass on structure alone.
pub(super) fn france(number: &str) -> bool {
    if number.len() != 11 || digits(number).is_none() {
        return true;
    }
    let Some(siren) = number.get(2..) else {
        return false;
    };
    match (mod_large(&format!("{siren}12"), 97), value_at(number, 0..2)) {
        (Some(key), Some(check)) => u64::from(key) == check,
        _ => false,
    }
}

/// The whole 10-digit number is divisible by 11.
pub(super) fn slovakia(number: &str) -> bool {
    mod_large(number, 11) == Some(0)
}

/// Legal entities use a mod-11 check with a shifted residue; natural persons
/// (first digit 0-3) start with a DDMM birth date and carry no check digit.
pub(super) fn latvia(number: &str) -> bool {
    let Some(ds) = digits(number) else {
        return false;
    };
    let (Some(&first), Some(&check)) = (ds.first(), ds.get(10)) else {
        return false;
    };
    if first <= 3 {
        return ds.get(2).is_some_and(|&month_tens| month_tens <= 1);
    }

    let mut total = weighted_sum(&LATVIA_WEIGHTS, &ds);
    if total % 11 == 4 && first == 9 {
        total -= 45;
    }
    let r = total % 11;
    let expected = match r.cmp(&4) {
        Ordering::Equal => 0,
        Ordering::Greater => 14 - r,
        Ordering::Less => 3 - r,
    };
    expected == check
}

/// Variable-length (2-10 digit) numbers; weights are right-aligned so the
/// digit before the check always carries weight 2.
pub(super) fn romania(number: &str) -> bool {
    let Some(ds) = digits(number) else {
        return false;
    };
    let Some((&check, body)) = ds.split_last() else {
        return false;
    };
    if body.is_empty() || ds.len() > ROMANIA_WEIGHTS.len() {
        return false;
    }
    let weights = &ROMANIA_WEIGHTS[ROMANIA_WEIGHTS.len() - ds.len()..];
    (weighted_sum(weights, body) * 10 % 11) % 10 == check
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luxembourg_prefix_mod_89() {
        assert!(luxembourg("12345613"));
        assert!(!luxembourg("12345614"));
        assert!(!luxembourg("1234561"));
    }

    #[test]
    fn malta_complement_of_37() {
        // 1·3 + 2·4 + 3·6 + 4·7 + 5·8 + 6·9 = 151; 151 mod 37 = 3; 37 - 3 = 34
        assert!(malta("12345634"));
        assert!(!malta("12345635"));
    }

    #[test]
    fn denmark_remainder_zero() {
        assert!(denmark("13585628"));
        assert!(!denmark("13585629"));
    }

    #[test]
    fn residue_reject_ten_has_no_check_digit() {
        // 1·5 = 5 → 11 - 5 = 6
        assert!(switzerland("100000006"));
        // 1·5 + 7·4 = 33 → remainder 0 → complement 11 → check 0
        assert!(switzerland("100000070"));
        // 5·2 = 10 → remainder 10 → complement 1
        assert!(switzerland("000500001"));
        // 3·4 = 12 → remainder 1 → complement 10, no check digit can match
        for check in 0..=9 {
            assert!(!switzerland(&format!("00000003{check}")));
        }
    }

    #[test]
    fn greece_pads_eight_digit_form() {
        assert!(greece("094259216"));
        assert!(greece("94259216"));
        assert!(!greece("094259217"));
    }

    #[test]
    fn belgium_old_and_new_length() {
        assert!(belgium("0411905847"));
        assert!(belgium("411905847"));
        assert!(!belgium("0411905848"));
    }

    #[test]
    fn france_numeric_key() {
        assert!(france("40303265045"));
        assert!(!france("41303265045"));
        // key 00: SIREN 300076965 ‖ 12 = 30007696512, divisible by 97
        assert!(france("00300076965"));
    }

    #[test]
    fn france_key_matches_native_arithmetic() {
        for siren in [303_265_045u64, 300_076_965, 999_999_999, 0, 123_456_789] {
            let native = (siren * 100 + 12) % 97;
            let number = format!("{native:02}{siren:09}");
            assert!(france(&number), "{number}");
            let wrong = format!("{:02}{siren:09}", (native + 1) % 97);
            assert!(!france(&wrong), "{wrong}");
        }
    }

    #[test]
    fn france_alphabetic_keys_pass_on_structure() {
        assert!(france("0123456789"));
        assert!(france("123456789"));
    }

    #[test]
    fn slovakia_divisible_by_11() {
        assert!(slovakia("2022749619"));
        assert!(!slovakia("2022749618"));
    }

    #[test]
    fn latvia_legal_entity_and_person() {
        assert!(latvia("40003521600"));
        assert!(!latvia("40003521601"));
        // natural person: DDMM birth date, no check digit
        assert!(latvia("01019012345"));
        assert!(!latvia("01219012345"));
    }

    #[test]
    fn romania_right_aligned_weights() {
        assert!(romania("18547290"));
        assert!(!romania("18547291"));
        assert!(!romania("1"));
        assert!(!romania("12345678901"));
    }

    #[test]
    fn other_single_modulus_countries() {
        assert!(estonia("100931558"));
        assert!(!estonia("100931559"));
        assert!(hungary("12892312"));
        assert!(!hungary("12892313"));
        assert!(netherlands("004495445"));
        assert!(!netherlands("004495446"));
        assert!(poland("5260001246"));
        assert!(!poland("5260001247"));
        assert!(finland("20774740"));
        assert!(!finland("20774741"));
        assert!(portugal("501964843"));
        assert!(!portugal("501964844"));
        assert!(slovenia("50223054"));
        assert!(!slovenia("50223055"));
        assert!(norway("974760673"));
        assert!(!norway("974760674"));
    }

    #[test]
    fn short_or_non_digit_bodies_fail() {
        assert!(!denmark("1358562"));
        assert!(!malta("123456"));
        assert!(!netherlands("00449544X"));
        assert!(!belgium(""));
        assert!(!latvia("4000352160"));
    }
}
