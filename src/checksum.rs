//! Four-digit display checksum for transaction records.
//!
//! This is a short, human-readable digest. It is not collision resistant and
//! offers no protection against deliberate modification; it only lets a
//! record be compared against its own fields.
//!
//! The scheme is fixed so that digests are stable across runs and platforms:
//!
//! - each string is hashed as `h = 31 * h + unit` over its UTF-16 code units,
//!   with wrapping 32-bit signed arithmetic
//! - the timestamp is hashed from its epoch milliseconds, XOR-ing the high
//!   32 bits into the low 32 bits
//! - the five hashes are summed with wrapping arithmetic, reduced modulo
//!   10000 (remainder takes the sign of the sum), made non-negative and
//!   zero-padded to four digits

use chrono::{DateTime, Utc};

/// Modulus applied to the summed hashes.
const MODULUS: i32 = 10_000;

/// Hashes a string over its UTF-16 code units.
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Hashes a timestamp by folding the high and low halves of its epoch millis.
pub fn timestamp_hash(timestamp: &DateTime<Utc>) -> i32 {
    let millis = timestamp.timestamp_millis() as u64;
    (millis ^ (millis >> 32)) as i32
}

/// Computes the 4-digit checksum for a record's fields.
///
/// Always returns exactly four ASCII digits.
pub fn checksum(
    id: &str,
    drug_id: &str,
    from: &str,
    to: &str,
    timestamp: &DateTime<Utc>,
) -> String {
    let sum = [id, drug_id, from, to]
        .iter()
        .map(|s| string_hash(s))
        .fold(timestamp_hash(timestamp), i32::wrapping_add);

    format!("{:04}", (sum % MODULUS).abs())
}
