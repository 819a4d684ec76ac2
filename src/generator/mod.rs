// src/generator/mod.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub mod salt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
pub const EXTENDED: &str = "áàâäãåçéèêëíìîïñóòôöõúùûüýÿæœ";

// Pool order matters for short lengths, see generate().
const POOLS: [&str; 5] = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL, EXTENDED];

pub struct SecureGenerator;

impl SecureGenerator {
    pub fn new() -> Self {
        SecureGenerator
    }

    /// Generate a random password of exactly `length` characters.
    ///
    /// One character is drawn from each of the five pools first, the rest
    /// uniformly from their union, and the whole sequence is then shuffled so
    /// the guaranteed characters are not anchored to fixed positions.
    ///
    /// When `length` is smaller than the pool count, pools are honored in
    /// declaration order until positions run out and no filler is added.
    ///
    /// All character selection goes through the OS entropy source; the output
    /// is a credential.
    pub fn generate(&self, length: usize) -> String {
        let mut rng = OsRng;
        let union: Vec<char> = POOLS.iter().flat_map(|p| p.chars()).collect();

        let mut password: Vec<char> = Vec::with_capacity(length);
        for pool in POOLS.iter().take(length) {
            password.push(pick(&mut rng, pool));
        }
        while password.len() < length {
            password.push(union[rng.gen_range(0..union.len())]);
        }

        password.shuffle(&mut rng);
        password.into_iter().collect()
    }
}

impl Default for SecureGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick(rng: &mut OsRng, pool: &str) -> char {
    let chars: Vec<char> = pool.chars().collect();
    chars[rng.gen_range(0..chars.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_has_exact_char_length() {
        let generator = SecureGenerator::new();
        for length in [5, 12, 25, 64] {
            let password = generator.generate(length);
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn output_covers_all_five_pools() {
        let generator = SecureGenerator::new();
        for _ in 0..50 {
            let password = generator.generate(25);
            for pool in POOLS {
                assert!(
                    password.chars().any(|c| pool.contains(c)),
                    "missing a character from pool {:?} in {:?}",
                    pool,
                    password
                );
            }
        }
    }

    #[test]
    fn short_lengths_honor_pools_in_order() {
        let generator = SecureGenerator::new();
        for _ in 0..20 {
            let password = generator.generate(3);
            assert_eq!(password.chars().count(), 3);
            // First three pools each contribute exactly one character.
            for pool in &POOLS[..3] {
                assert_eq!(password.chars().filter(|c| pool.contains(*c)).count(), 1);
            }
        }
    }
}
