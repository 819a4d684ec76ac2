// src/analysis/heuristic.rs
use rand::Rng;

// Random trip threshold: 5 in 1000 draws (0.5%).
const RANDOM_TRIP_IN_1000: u32 = 5;

const SEQUENCE_WINDOW: usize = 4;

/// Structural weakness checks: a missing character class, a run of three or
/// more identical characters, or an obvious ascending/descending sequence.
/// The pipeline's acceptance invariants are stated against these checks.
pub fn is_structurally_weak(password: &str) -> bool {
    missing_character_class(password) || has_repeat_run(password) || has_sequence(password)
}

/// Gate used by the pipeline to decide whether to retry.
///
/// On top of the structural checks, a uniform 0.5% random trip rejects even
/// clean candidates, standing in for residual real-world risk. This is a
/// retry-biasing heuristic, not an attack simulation.
pub fn is_crackable(password: &str) -> bool {
    let random_factor = rand::thread_rng().gen_range(0..1000u32) < RANDOM_TRIP_IN_1000;
    random_factor || is_structurally_weak(password)
}

fn missing_character_class(password: &str) -> bool {
    let mut has_uppercase = false;
    let mut has_lowercase = false;
    let mut has_digit = false;
    let mut has_special = false;

    for c in password.chars() {
        if c.is_ascii_uppercase() {
            has_uppercase = true;
        } else if c.is_ascii_lowercase() {
            has_lowercase = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else {
            has_special = true;
        }
    }

    !(has_uppercase && has_lowercase && has_digit && has_special)
}

// Three or more identical consecutive characters.
fn has_repeat_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

// Ascending or descending alphanumeric window, e.g. "abcd", "1234", "dcba".
fn has_sequence(password: &str) -> bool {
    let lower: Vec<char> = password.to_lowercase().chars().collect();
    lower
        .windows(SEQUENCE_WINDOW)
        .any(|w| is_consecutive(w, 1) || is_consecutive(w, -1))
}

fn is_consecutive(window: &[char], step: i32) -> bool {
    window.iter().all(|c| c.is_ascii_alphanumeric())
        && window
            .windows(2)
            .all(|pair| pair[1] as i32 - pair[0] as i32 == step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_runs_are_flagged() {
        // Contains a 4-run of 'a'; must trip regardless of the random factor.
        assert!(is_structurally_weak("Aa1!aaaa"));
        assert!(is_structurally_weak("xxXX111!a"));
    }

    #[test]
    fn missing_classes_are_flagged() {
        assert!(is_structurally_weak("B3!XZ8@")); // no lowercase
        assert!(is_structurally_weak("b3!xz8@")); // no uppercase
        assert!(is_structurally_weak("Bc!xzQ@")); // no digit
        assert!(is_structurally_weak("B3axz8Q")); // no special
    }

    #[test]
    fn sequences_are_flagged_case_insensitively() {
        assert!(is_structurally_weak("Xk9!ABCD@z"));
        assert!(is_structurally_weak("Xk9!1234@z"));
        assert!(is_structurally_weak("Xk9!dcba@z"));
    }

    #[test]
    fn diverse_patternless_passwords_pass() {
        assert!(!is_structurally_weak("Xk9!mQ2@pL5#"));
        assert!(!is_structurally_weak("aB3!xZ8@"));
        // Diacritics count toward the special class.
        assert!(!is_structurally_weak("aB3éxZ8ñ"));
    }

    #[test]
    fn digit_letter_boundary_is_not_a_sequence() {
        // '9' and 'a' are adjacent codepoint-wise only across classes.
        assert!(!is_structurally_weak("Wm89ab!Q"));
    }
}
