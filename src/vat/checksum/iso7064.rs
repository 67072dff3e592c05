//! ISO 7064 MOD 11,10 (hybrid system), used by Germany, Croatia and Serbia.

use super::digits;

/// Verify a number whose last digit is an ISO 7064 MOD 11,10 check digit.
///
/// A carry starts at 10. For each body digit: `sum = (digit + carry) mod 10`,
/// 0 becomes 10, then `carry = 2·sum mod 11`. The number is valid when
/// `(carry + check) mod 10 == 1`.
pub(super) fn mod_11_10(number: &str) -> bool {
    let Some(ds) = digits(number) else {
        return false;
    };
    let Some((&check, body)) = ds.split_last() else {
        return false;
    };
    if body.is_empty() {
        return false;
    }

    let carry = body.iter().fold(10, |carry, &d| {
        let sum = match (d + carry) % 10 {
            0 => 10,
            s => s,
        };
        (2 * sum) % 11
    });
    (carry + check) % 10 == 1
}
