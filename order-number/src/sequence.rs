//! Numeric suffixes
//!
//! Suffixes mix the millisecond timestamp with a random offset. This makes
//! same-millisecond collisions rare, not impossible; the generator's retry
//! loop is the actual safety net within a session.

use crate::config::SequenceLength;
use rand::Rng;

/// Modulus of the 4-digit business sequence
const BUSINESS_SEQUENCE_MODULUS: u64 = 10_000;

/// Character count of the fallback suffix
const FALLBACK_SUFFIX_LEN: usize = 4;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `((timestamp mod 10^n) + random[0, 10^n)) mod 10^n`, zero-padded to n digits
pub fn sequence_suffix<R: Rng + ?Sized>(
    timestamp_ms: i64,
    length: SequenceLength,
    rng: &mut R,
) -> String {
    let modulus = length.modulus();
    let base = timestamp_ms.unsigned_abs() % modulus;
    let offset = rng.gen_range(0..modulus);
    let value = (base + offset) % modulus;
    format!("{:0width$}", value, width = length.get() as usize)
}

/// 4-digit sequence used by business order numbers
pub fn business_sequence<R: Rng + ?Sized>(timestamp_ms: i64, rng: &mut R) -> String {
    let base = timestamp_ms.unsigned_abs() % BUSINESS_SEQUENCE_MODULUS;
    let offset = rng.gen_range(0..BUSINESS_SEQUENCE_MODULUS);
    format!("{:04}", (base + offset) % BUSINESS_SEQUENCE_MODULUS)
}

/// Four random uppercase base-36 characters
pub fn fallback_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..FALLBACK_SUFFIX_LEN)
        .map(|_| BASE36_DIGITS[rng.gen_range(0..BASE36_DIGITS.len())] as char)
        .collect()
}

/// Last two characters of a seller id, uppercased. Empty when absent.
pub fn seller_code(seller_id: Option<&str>) -> String {
    let Some(id) = seller_id else {
        return String::new();
    };
    let chars: Vec<char> = id.chars().collect();
    let start = chars.len().saturating_sub(2);
    chars[start..].iter().collect::<String>().to_uppercase()
}
