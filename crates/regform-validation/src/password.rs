//! Password validation functions

/// Symbols accepted as the "special character" of a password
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Character classes a password has to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `a-z`
    Lowercase,
    /// `A-Z`
    Uppercase,
    /// `0-9`
    Digit,
    /// One of [`PASSWORD_SYMBOLS`]
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Symbol => PASSWORD_SYMBOLS.contains(c),
        }
    }
}

/// True when at least one character of `s` belongs to `class`
pub fn contains_class(s: &str, class: CharClass) -> bool {
    s.chars().any(|c| class.matches(c))
}

/// Character classes the password does not use yet, in checking order
///
/// # Examples
/// ```
/// use regform_validation::password::{missing_classes, CharClass};
/// assert_eq!(
///     missing_classes("abc12345"),
///     vec![CharClass::Uppercase, CharClass::Symbol]
/// );
/// ```
pub fn missing_classes(password: &str) -> Vec<CharClass> {
    CharClass::ALL
        .into_iter()
        .filter(|class| !contains_class(password, *class))
        .collect()
}

/// Password is strong: 8+ chars drawing from every [`CharClass`]
pub fn is_strong_password(password: &str) -> bool {
    crate::string::has_min_length(password, 8) && missing_classes(password).is_empty()
}
