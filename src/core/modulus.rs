//! Modular reduction of decimal strings longer than native integers.

/// Default number of decimal characters reduced per step.
pub const DEFAULT_CHUNK_SIZE: usize = 6;

/// Largest chunk size accepted; bigger values are clamped to it.
///
/// With the running remainder below `u32::MAX`, `remainder * 10^18 + chunk`
/// still fits in a `u128`.
pub const MAX_CHUNK_SIZE: usize = 18;

/// `digits mod modulus` for an arbitrarily long string of ASCII digits,
/// using the default chunk size of 6.
///
/// Returns `None` for an empty string, any non-digit character, or a zero
/// modulus.
///
/// # Examples
///
/// ```
/// use vatid::mod_large;
///
/// assert_eq!(mod_large("12345612", 97), Some(12345612 % 97));
/// // 30007696512 exceeds u32 but is reduced exactly
/// assert_eq!(mod_large("30007696512", 97), Some(0));
/// ```
pub fn mod_large(digits: &str, modulus: u32) -> Option<u32> {
    mod_large_chunked(digits, modulus, DEFAULT_CHUNK_SIZE)
}

/// `digits mod modulus`, reducing `chunk_size` characters at a time.
///
/// The string is split left to right into chunks (the last may be shorter).
/// The first chunk seeds the remainder; each following chunk of length `L`
/// updates it as `(remainder * 10^L + chunk) mod modulus`.
pub fn mod_large_chunked(digits: &str, modulus: u32, chunk_size: usize) -> Option<u32> {
    if digits.is_empty() || modulus == 0 || chunk_size == 0 {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let chunk_size = chunk_size.min(MAX_CHUNK_SIZE);
    let modulus = u128::from(modulus);
    let mut chunks = digits.as_bytes().chunks(chunk_size);

    let mut remainder = chunk_value(chunks.next()?) % modulus;
    for chunk in chunks {
        let shift = 10u128.checked_pow(u32::try_from(chunk.len()).ok()?)?;
        remainder = (remainder * shift + chunk_value(chunk)) % modulus;
    }

    u32::try_from(remainder).ok()
}

/// Value of an all-digit byte chunk of at most [`MAX_CHUNK_SIZE`] characters.
fn chunk_value(chunk: &[u8]) -> u128 {
    chunk
        .iter()
        .fold(0u128, |acc, b| acc * 10 + u128::from(b - b'0'))
}
