// src/analysis/entropy.rs

/// Estimate password strength as `floor(length * log2(pool size))`.
///
/// Pool size sums fixed per-class contributions based on which ASCII classes
/// appear: uppercase +26, lowercase +26, digits +10, and +33 for any
/// non-alphanumeric character (a fixed approximation standing in for the
/// special plus extended Latin alphabet). An empty password has a pool of 0
/// and yields 0 bits rather than an undefined log2.
pub fn estimate_bits(password: &str) -> u32 {
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digits = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let mut pool_size = 0u32;
    if has_uppercase {
        pool_size += 26;
    }
    if has_lowercase {
        pool_size += 26;
    }
    if has_digits {
        pool_size += 10;
    }
    if has_special {
        pool_size += 33;
    }

    if pool_size == 0 {
        return 0;
    }

    let length = password.chars().count() as f64;
    (length * (pool_size as f64).log2()).floor() as u32
}
