//! String validation functions
//!
//! Lengths are counted in characters, not bytes, so "José" is four long.

/// Number of characters in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// A required value is present when it is non-empty. Whitespace counts.
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

pub fn has_min_length(s: &str, min: usize) -> bool {
    char_len(s) >= min
}

pub fn has_max_length(s: &str, max: usize) -> bool {
    char_len(s) <= max
}

pub fn has_length_between(s: &str, min: usize, max: usize) -> bool {
    let len = char_len(s);
    len >= min && len <= max
}

/// Enum/value restriction
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}
