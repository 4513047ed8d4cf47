// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use crate::models::{PasswordGenerationOptions, SYMBOLS};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Generate a random password from the selected character classes.
///
/// Each selected class contributes at least one character, the remainder is
/// drawn uniformly from the combined pool, and the whole sequence is
/// shuffled so the guaranteed characters are not predictably placed. With
/// no classes selected the result is the empty string. Should the requested
/// length be smaller than the number of selected classes, the shuffled
/// result is truncated to the requested length. All draws use the OS CSPRNG.
pub fn generate_password(options: &PasswordGenerationOptions) -> String {
    let mut classes: Vec<&[u8]> = Vec::new();
    if options.include_uppercase {
        classes.push(UPPERCASE.as_bytes());
    }
    if options.include_lowercase {
        classes.push(LOWERCASE.as_bytes());
    }
    if options.include_numbers {
        classes.push(DIGITS.as_bytes());
    }
    if options.include_symbols {
        classes.push(SYMBOLS.as_bytes());
    }

    if classes.is_empty() {
        return String::new();
    }

    let pool: Vec<u8> = classes.concat();

    // One guaranteed draw per selected class.
    let mut password: Vec<u8> = classes
        .iter()
        .filter_map(|class| class.choose(&mut OsRng).copied())
        .collect();

    // Fill the remainder from the full pool.
    while password.len() < options.length {
        if let Some(&c) = pool.choose(&mut OsRng) {
            password.push(c);
        }
    }

    password.shuffle(&mut OsRng);
    password.truncate(options.length);

    // The pools are pure ASCII.
    String::from_utf8(password).unwrap_or_default()
}
