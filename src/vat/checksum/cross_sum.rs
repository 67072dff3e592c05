//! Weighted sums where each product above 9 contributes its digit sum.

use super::{digits, weighted_sum};

/// Σ of the cross sums of `weight × digit` (a product of 12 contributes 1 + 2).
pub(super) fn folded_sum(weights: &[u32], digits: &[u32]) -> u32 {
    weights
        .iter()
        .zip(digits)
        .map(|(w, d)| {
            let product = w * d;
            product / 10 + product % 10
        })
        .sum()
}

/// The digit that brings `folded_sum + offset` up to a multiple of 10.
pub(super) fn complement_digit(weights: &[u32], digits: &[u32], offset: u32) -> u32 {
    (10 - (folded_sum(weights, digits) + offset) % 10) % 10
}

const AUSTRIA_WEIGHTS: [u32; 7] = [1, 2, 1, 2, 1, 2, 1];
const ITALY_WEIGHTS: [u32; 10] = [1, 2, 1, 2, 1, 2, 1, 2, 1, 2];
const SWEDEN_WEIGHTS: [u32; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

/// Eight digits after the `U`; the sum is offset by 4.
pub(super) fn austria(number: &str) -> bool {
    let Some(ds) = digits(number) else {
        return false;
    };
    ds.len() == 8 && ds.get(7) == Some(&complement_digit(&AUSTRIA_WEIGHTS, &ds, 4))
}

/// Partita IVA: seven-digit registration number (not all zero), three-digit
/// office code (001-201, or 888/999), Luhn check digit.
pub(super) fn italy(number: &str) -> bool {
    let Some(ds) = digits(number) else {
        return false;
    };
    if ds.len() != 11 || ds[..7].iter().all(|&d| d == 0) {
        return false;
    }
    let office = weighted_sum(&[100, 10, 1], &ds[7..10]);
    if office < 1 || (office > 201 && office != 888 && office != 999) {
        return false;
    }
    ds.get(10) == Some(&complement_digit(&ITALY_WEIGHTS, &ds, 0))
}

/// Swedish organisation number (10 digits) followed by `01`; Luhn over the
/// first nine digits.
pub(super) fn sweden(number: &str) -> bool {
    let Some(ds) = digits(number) else {
        return false;
    };
    ds.len() == 12 && ds.get(9) == Some(&complement_digit(&SWEDEN_WEIGHTS, &ds, 0))
}
