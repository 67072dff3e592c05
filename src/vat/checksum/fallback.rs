//! Countries whose strategy tries several interpretations in a fixed order.

use super::weighted::{BULGARIA_MISC, CZECH_LEGAL};
use super::{digits, value, weighted_sum};
use crate::core::mod_large;

/// One interpretation of a 10-digit Bulgarian number.
type BulgarianAttempt = fn(&[u32]) -> bool;

/// Tried in order; the first that checks out accepts the number.
const BULGARIAN_PERSONS: [BulgarianAttempt; 3] = [
    bulgarian_physical_person,
    bulgarian_foreigner,
    bulgarian_miscellaneous,
];

const BULGARIA_PERSON_WEIGHTS: [u32; 9] = [2, 4, 8, 5, 10, 9, 7, 3, 6];
const BULGARIA_FOREIGNER_WEIGHTS: [u32; 9] = [21, 19, 17, 13, 11, 9, 7, 3, 1];

const UK_WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];

/// Maps the computed digit of a special Czech individual number to its check digit.
const CZECH_SPECIAL_LOOKUP: [u32; 11] = [8, 7, 6, 5, 4, 3, 2, 1, 0, 9, 10];

/// Mod-11 check with a retry: if the first weight vector leaves remainder
/// 10, the second is used, and a second remainder of 10 means check digit 0.
fn two_pass(ds: &[u32], primary: &[u32], secondary: &[u32]) -> bool {
    let [body @ .., check] = ds else {
        return false;
    };
    if body.len() != primary.len() {
        return false;
    }
    let mut r = weighted_sum(primary, body) % 11;
    if r == 10 {
        r = weighted_sum(secondary, body) % 11;
    }
    if r == 10 {
        r = 0;
    }
    r == *check
}

/// Nine digits for legal entities; ten digits for persons, tried as a
/// Bulgarian citizen, then a foreigner, then a miscellaneous registration.
pub(super) fn bulgaria(number: &str) -> bool {
    let Some(ds) = digits(number) else {
        return false;
    };
    match ds.len() {
        9 => two_pass(&ds, &[1, 2, 3, 4, 5, 6, 7, 8], &[3, 4, 5, 6, 7, 8, 9, 10]),
        10 => BULGARIAN_PERSONS.iter().any(|attempt| attempt(&ds)),
        _ => false,
    }
}

/// EGN: YYMMDD birth date (months 21-32 for births before 1900) and a mod-11 check.
fn bulgarian_physical_person(ds: &[u32]) -> bool {
    let [_, _, m1, m2, d1, .., check] = ds else {
        return false;
    };
    if *m1 > 5 || *d1 > 3 {
        return false;
    }
    let month = m1 * 10 + m2;
    if !matches!(month, 1..=12 | 21..=32) {
        return false;
    }
    let expected = match weighted_sum(&BULGARIA_PERSON_WEIGHTS, ds) % 11 {
        10 => 0,
        r => r,
    };
    expected == *check
}

/// LNCh: weighted sum mod 10.
fn bulgarian_foreigner(ds: &[u32]) -> bool {
    ds.get(9) == Some(&(weighted_sum(&BULGARIA_FOREIGNER_WEIGHTS, ds) % 10))
}

/// Any other registration: mod 11 with weights 4,3,2,7,6,5,4,3,2.
fn bulgarian_miscellaneous(ds: &[u32]) -> bool {
    BULGARIA_MISC.verify_digits(ds)
}

/// Nine digits for legal entities (eighth digit 1), twelve for temporarily
/// registered taxpayers (eleventh digit 1); both use the two-pass mod-11 check.
pub(super) fn lithuania(number: &str) -> bool {
    let Some(ds) = digits(number) else {
        return false;
    };
    match ds.len() {
        9 => ds[7] == 1 && two_pass(&ds, &[1, 2, 3, 4, 5, 6, 7, 8], &[3, 4, 5, 6, 7, 8, 9, 1]),
        12 => {
            ds[10] == 1
                && two_pass(
                    &ds,
                    &[1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2],
                    &[3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4],
                )
        }
        _ => false,
    }
}

/// Czech DIČ: legal entities (8 digits), then three forms of birth number
/// for individuals, selected by length and digit ranges.
pub(super) fn czech_republic(number: &str) -> bool {
    let Some(ds) = digits(number) else {
        return false;
    };
    match ds.as_slice() {
        [_, _, _, _, _, _, _, _] => CZECH_LEGAL.verify_digits(&ds),
        // born before 1954: no check digit, year at most 53
        [y1 @ 0..=5, y2, 0 | 1 | 5 | 6, _, 0..=3, _, _, _, _] => y1 * 10 + y2 <= 53,
        [6, rest @ ..] if rest.len() == 8 => czech_special_individual(&ds),
        [_, _, 0..=3 | 5..=8, _, 0..=3, _, _, _, _, _] => {
            let pairs: u32 = ds.chunks(2).map(|p| weighted_sum(&[10, 1], p)).sum();
            pairs % 11 == 0 && mod_large(number, 11) == Some(0)
        }
        _ => false,
    }
}

fn czech_special_individual(ds: &[u32]) -> bool {
    let (Some(body), Some(&check)) = (ds.get(1..8), ds.get(8)) else {
        return false;
    };
    let computed = (11 - weighted_sum(&[8, 7, 6, 5, 4, 3, 2], body) % 11) % 10;
    computed != 0
        && CZECH_SPECIAL_LOOKUP
            .get(computed as usize - 1)
            .is_some_and(|&expected| expected == check)
}

/// UK VRNs.
///
/// - `GD000`–`GD499`: government departments
/// - `HA500`–`HA999`: health authorities
/// - 9 digits, or 12 for branch traders (the first 9 carry the check): the
///   traditional mod-97 scheme is tried first, then the mod-9755 scheme
///   (check digits shifted by 55) for numbers issued from 2010.
pub(super) fn united_kingdom(number: &str) -> bool {
    if let Some(block) = number.strip_prefix("GD") {
        return digits(block).and_then(|ds| value(&ds)).is_some_and(|n| n < 500);
    }
    if let Some(block) = number.strip_prefix("HA") {
        return digits(block).and_then(|ds| value(&ds)).is_some_and(|n| n > 499);
    }

    let Some(ds) = digits(number) else {
        return false;
    };
    if ds.iter().all(|&d| d == 0) {
        return false;
    }
    let (Some(serial), Some(check)) = (ds.get(..7), ds.get(7..9)) else {
        return false;
    };
    let (Some(block), Some(check)) = (value(serial), value(check)) else {
        return false;
    };

    let mod97 = u64::from((97 - weighted_sum(&UK_WEIGHTS, serial) % 97) % 97);
    if mod97 == check && uk_traditional_range(block) {
        return true;
    }

    let mod9755 = if mod97 >= 55 { mod97 - 55 } else { mod97 + 42 };
    mod9755 == check && block > 1_000_000
}

/// Serial blocks that were issued under the traditional mod-97 scheme.
fn uk_traditional_range(block: u64) -> bool {
    block < 9_990_001
        && !(100_000..=999_999).contains(&block)
        && !(9_490_001..=9_700_000).contains(&block)
}
