/// Local identifier generation
///
/// Ids are the current millisecond timestamp in base 36 followed by a random
/// base-36 suffix. They are only lookup keys inside one browser profile, so
/// no collision bound is promised.

use chrono::Utc;
use uuid::Uuid;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Width of the random suffix, in base-36 digits
const SUFFIX_LEN: u32 = 9;

/// Generate a new identifier string
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u128;
    let random = Uuid::new_v4().as_u128() % 36u128.pow(SUFFIX_LEN);

    format!(
        "{}{:0>width$}",
        to_base36(millis),
        to_base36(random),
        width = SUFFIX_LEN as usize
    )
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(char::from(ALPHABET[(value % 36) as usize]));
        value /= 36;
    }

    digits.into_iter().rev().collect()
}
