// src/generator/salt.rs
use chrono::Utc;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};

const SALT_LEN: usize = 5;

/// Inject a short salt sequence into the password, then truncate back to the
/// original character length.
///
/// The salt token concatenates the current millisecond timestamp in base 36
/// with a random hex token and takes the first five characters; each one is
/// inserted at an independent uniform-random position in the growing string.
///
/// This step only decorrelates the output from the generator's internal pool
/// ordering. Timestamp-derived bytes are predictable, so it adds no
/// meaningful entropy and is not a security hardening measure.
pub fn salt(password: &str) -> String {
    let mut rng = OsRng;

    let mut random = [0u8; 8];
    rng.fill_bytes(&mut random);
    let token = format!(
        "{}{}",
        to_base36(Utc::now().timestamp_millis() as u64),
        hex::encode(random)
    );

    let target = password.chars().count();
    let mut chars: Vec<char> = password.chars().collect();
    for c in token.chars().take(SALT_LEN) {
        let position = if chars.is_empty() {
            0
        } else {
            rng.gen_range(0..chars.len())
        };
        chars.insert(position, c);
    }

    chars.truncate(target);
    chars.into_iter().collect()
}

fn to_base36(mut value: u64) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salting_preserves_char_length() {
        for input in ["abcdefghij", "Aa1!áàâäãåçéèêëíìîïñóòô", "x"] {
            let salted = salt(input);
            assert_eq!(salted.chars().count(), input.chars().count());
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(salt(""), "");
    }

    #[test]
    fn base36_round_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }
}
