//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Same grammar browsers use for `<input type="email">`: a permissive local
// part, then dot-separated labels of at most 63 characters.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Validates email syntax
///
/// Checks for:
/// - Exactly one '@' with a non-empty local part before it
/// - Domain labels made of letters, digits and inner hyphens
/// - No empty labels (no leading, trailing or doubled dots)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
