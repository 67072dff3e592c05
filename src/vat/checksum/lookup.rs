//! Remainders mapped through a character table to a check letter.

use super::cross_sum::{complement_digit, folded_sum};
use super::{digits, value, weighted_sum};

/// Substitution for digits in even positions of a Cypriot number.
const CYPRUS_EVEN: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];

const IRELAND_WEIGHTS: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];

/// DNI/NIE control letters, indexed by the number mod 23.
const NIF_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

const SPAIN_WEIGHTS: [u32; 7] = [2, 1, 2, 1, 2, 1, 2];

/// Eight digits and a letter; digits in even positions are substituted, the
/// total mod 26 selects the letter (`A` = 0).
pub(super) fn cyprus(number: &str) -> bool {
    if number.starts_with("12") {
        return false;
    }
    let (Some(ds), Some(&letter)) = (number.get(..8).and_then(digits), number.as_bytes().get(8))
    else {
        return false;
    };
    let total: u32 = ds
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                CYPRUS_EVEN.get(d as usize).copied().unwrap_or(d)
            } else {
                d
            }
        })
        .sum();
    letter == b'A' + (total % 26) as u8
}

/// Irish numbers. The old form (`8Z49289F`, letter or symbol in second
/// place) is rearranged to the new form before checking; the 2013 form with
/// two trailing letters passes on structure.
pub(super) fn ireland(number: &str) -> bool {
    let bytes = number.as_bytes();
    if bytes.len() == 9 {
        return bytes[..7].iter().all(u8::is_ascii_digit)
            && bytes[7].is_ascii_uppercase()
            && matches!(bytes[8], b'A' | b'H');
    }
    if bytes.len() != 8 {
        return false;
    }

    let number = if bytes[1].is_ascii_digit() {
        number.to_owned()
    } else {
        match (number.get(2..7), number.get(..1), number.get(7..)) {
            (Some(middle), Some(first), Some(letter)) => format!("0{middle}{first}{letter}"),
            _ => return false,
        }
    };

    let (Some(ds), Some(&letter)) = (number.get(..7).and_then(digits), number.as_bytes().get(7))
    else {
        return false;
    };
    let expected = match weighted_sum(&IRELAND_WEIGHTS, &ds) % 23 {
        0 => b'W',
        r => b'@' + r as u8,
    };
    letter == expected
}

/// Spanish entity types, tried in this order on the first and last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanishEntity {
    /// Companies with a numeric control digit (`A12345674`).
    NationalJuridical,
    /// Other juridical entities with a control letter A-J (`P6407007A`).
    OtherJuridical,
    /// DNI, or NIE starting `Y`/`Z` (read as 1/2), with a control letter.
    Resident,
    /// `K`, `L`, `M`, `X` numbers: control letter over the seven digits only.
    NonResident,
}

impl SpanishEntity {
    fn classify(first: u8, last: u8) -> Option<Self> {
        match (first, last) {
            (b'A'..=b'H' | b'J' | b'U' | b'V', b'0'..=b'9') => Some(Self::NationalJuridical),
            (b'A'..=b'H' | b'N'..=b'S' | b'W', b'A'..=b'J') => Some(Self::OtherJuridical),
            (b'0'..=b'9' | b'Y' | b'Z', b'A'..=b'Z') => Some(Self::Resident),
            (b'K' | b'L' | b'M' | b'X', b'A'..=b'Z') => Some(Self::NonResident),
            _ => None,
        }
    }
}

/// Spanish NIF/CIF: a leading letter or digit, seven digits, and a trailing
/// control digit or letter whose meaning depends on the entity type.
pub(super) fn spain(number: &str) -> bool {
    let [first, middle @ .., last] = number.as_bytes() else {
        return false;
    };
    if middle.len() != 7 {
        return false;
    }
    let Some(ds) = std::str::from_utf8(middle).ok().and_then(digits) else {
        return false;
    };

    match SpanishEntity::classify(*first, *last) {
        Some(SpanishEntity::NationalJuridical) => {
            u32::from(last - b'0') == complement_digit(&SPAIN_WEIGHTS, &ds, 0)
        }
        Some(SpanishEntity::OtherJuridical) => {
            *last == b'@' + (10 - folded_sum(&SPAIN_WEIGHTS, &ds) % 10) as u8
        }
        Some(SpanishEntity::Resident) => {
            let lead = match first {
                b'Y' => 1,
                b'Z' => 2,
                d => u64::from(d - b'0'),
            };
            let body = value(&ds).map(|v| lead * 10_000_000 + v);
            body.is_some_and(|b| nif_letter(b) == Some(*last))
        }
        Some(SpanishEntity::NonResident) => {
            value(&ds).is_some_and(|b| nif_letter(b) == Some(*last))
        }
        None => false,
    }
}

fn nif_letter(number: u64) -> Option<u8> {
    NIF_LETTERS.get((number % 23) as usize).copied()
}
