// src/wordlist/mod.rs
use std::collections::HashSet;
use std::path::Path;

// Fallback used when the wordlist file cannot be read.
const DEFAULT_COMMON_PASSWORDS: [&str; 15] = [
    "password",
    "123456",
    "password123",
    "admin",
    "qwerty",
    "letmein",
    "welcome",
    "monkey",
    "1234567890",
    "abc123",
    "password1",
    "12345678",
    "qwerty123",
    "iloveyou",
    "admin123",
];

/// Set of known-common passwords, lowercased. Loaded once at startup and
/// read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct CommonPasswordSet {
    entries: HashSet<String>,
}

impl CommonPasswordSet {
    /// Load from a line-delimited file, one candidate password per line.
    /// Entries are lowercased and blank lines skipped. A missing or
    /// unreadable file falls back to the built-in list rather than
    /// failing startup.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let entries: HashSet<String> = contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_lowercase)
                    .collect();
                log::info!(
                    "Loaded {} common passwords from {}",
                    entries.len(),
                    path.display()
                );
                Self { entries }
            }
            Err(e) => {
                log::warn!(
                    "Could not read wordlist {}: {}. Using built-in fallback list.",
                    path.display(),
                    e
                );
                Self::builtin()
            }
        }
    }

    /// The built-in fallback list.
    pub fn builtin() -> Self {
        Self {
            entries: DEFAULT_COMMON_PASSWORDS
                .iter()
                .map(|pw| pw.to_string())
                .collect(),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
