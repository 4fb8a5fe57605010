//! Compiled patterns used by the registration rules
//!
//! Every pattern is anchored. Patterns ending in `*` accept the empty
//! string; required-ness is decided by the caller.

use once_cell::sync::Lazy;
use regex::Regex;

/// One or more ASCII letters
pub static LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());

/// Zero or more ASCII letters
pub static LETTERS_OPTIONAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]*$").unwrap());

/// One or more ASCII letters or whitespace
pub static LETTERS_AND_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

/// Zero or more ASCII letters or whitespace
pub static LETTERS_AND_SPACES_OPTIONAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]*$").unwrap());

/// One or more ASCII digits
pub static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Zero or more ASCII digits
pub static DIGITS_OPTIONAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*$").unwrap());

/// Fully formatted national identity number: `XXXXX-XXXXXXX-X`
pub static CNIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}-[0-9]{7}-[0-9]$").unwrap());

/// Check if string matches a compiled pattern
pub fn matches(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

pub fn is_cnic(value: &str) -> bool {
    CNIC.is_match(value)
}
