// src/wordlist/mod.rs
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use serde::Deserialize;

// Built-in fallback used whenever the external asset cannot be read.
const FALLBACK_PASSWORDS: [&str; 4] = ["password", "123456", "qwerty", "admin"];

#[derive(Deserialize)]
struct WordlistFile {
    passwords: Vec<String>,
}

// Process-wide store. Readers clone the Arc and scan without holding the
// lock; a reload swaps the whole set in a single write, so in-flight
// generations see either the old or the new complete set.
lazy_static! {
    static ref WORDLIST: RwLock<Arc<HashSet<String>>> =
        RwLock::new(Arc::new(fallback_set()));
    static ref WORDLIST_PATH: RwLock<Option<PathBuf>> = RwLock::new(None);
}

fn fallback_set() -> HashSet<String> {
    FALLBACK_PASSWORDS.iter().map(|s| s.to_string()).collect()
}

fn read_set(path: &Path) -> Option<HashSet<String>> {
    let raw = std::fs::read_to_string(path).ok()?;
    let parsed: WordlistFile = serde_json::from_str(&raw).ok()?;
    Some(parsed.passwords.into_iter().map(|p| p.to_lowercase()).collect())
}

fn swap(set: HashSet<String>) -> usize {
    let count = set.len();
    *WORDLIST.write().unwrap() = Arc::new(set);
    count
}

fn snapshot() -> Arc<HashSet<String>> {
    WORDLIST.read().unwrap().clone()
}

fn install(path: &Path) -> usize {
    match read_set(path) {
        Some(set) => {
            log::info!("Loaded {} common passwords from {}", set.len(), path.display());
            swap(set)
        }
        None => {
            log::warn!(
                "Failed to load wordlist from {}, falling back to built-in set",
                path.display()
            );
            swap(fallback_set())
        }
    }
}

/// Load the wordlist from a JSON asset of the form `{"passwords": [...]}`,
/// remembering the path for later reloads. A missing or malformed asset
/// installs the built-in fallback set; load failures never propagate.
pub fn load_from(path: &Path) -> usize {
    *WORDLIST_PATH.write().unwrap() = Some(path.to_path_buf());
    install(path)
}

/// Re-read the recorded asset and replace the set wholesale. Returns the
/// resulting entry count.
pub fn reload() -> usize {
    let path = WORDLIST_PATH.read().unwrap().clone();
    match path {
        Some(p) => install(&p),
        None => {
            log::warn!("No wordlist path recorded, installing built-in fallback set");
            swap(fallback_set())
        }
    }
}

/// Case-insensitive exact membership test.
pub fn contains_exact(candidate: &str) -> bool {
    snapshot().contains(&candidate.to_lowercase())
}

/// True when any wordlist entry occurs as a substring of the candidate,
/// case-insensitively. Every entry is checked; the sets in play are small
/// enough that a linear scan stays cheap.
pub fn contains_substring(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    snapshot().iter().any(|entry| lower.contains(entry.as_str()))
}

/// Current number of entries.
pub fn count() -> usize {
    snapshot().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // The store is process-wide, so tests that mutate it must not interleave.
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    fn write_wordlist(entries: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::json!({ "passwords": entries });
        write!(file, "{}", json).unwrap();
        file
    }

    #[test]
    fn load_replaces_previous_entries() {
        let _guard = TEST_LOCK.lock().unwrap();

        let first = write_wordlist(&["password", "letmein"]);
        assert_eq!(load_from(first.path()), 2);
        assert!(contains_exact("LetMeIn"));

        let second = write_wordlist(&["dragon", "monkey", "shadow"]);
        assert_eq!(load_from(second.path()), 3);
        assert_eq!(count(), 3);
        assert!(contains_exact("dragon"));
        assert!(!contains_exact("letmein"));
    }

    #[test]
    fn reload_rereads_the_recorded_path() {
        let _guard = TEST_LOCK.lock().unwrap();

        let mut file = write_wordlist(&["password"]);
        assert_eq!(load_from(file.path()), 1);

        // Rewrite the same file with three entries, then reload.
        file.as_file_mut().set_len(0).unwrap();
        let json = serde_json::json!({ "passwords": ["abc", "def", "ghi"] });
        std::io::Seek::seek(file.as_file_mut(), std::io::SeekFrom::Start(0)).unwrap();
        write!(file.as_file_mut(), "{}", json).unwrap();

        assert_eq!(reload(), 3);
        assert!(!contains_exact("password"));
    }

    #[test]
    fn missing_file_falls_back_to_builtin_set() {
        let _guard = TEST_LOCK.lock().unwrap();

        let count = load_from(Path::new("/nonexistent/wordlist.json"));
        assert_eq!(count, 4);
        assert!(contains_exact("password"));
        assert!(contains_exact("QWERTY"));
    }

    #[test]
    fn substring_check_finds_embedded_entries() {
        let _guard = TEST_LOCK.lock().unwrap();

        let file = write_wordlist(&["qwerty"]);
        load_from(file.path());

        assert!(contains_substring("xxQWERTYxx"));
        assert!(!contains_substring("entirely unrelated"));
    }
}
