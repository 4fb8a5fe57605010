//! Input masks for the national-ID and mobile-number fields
//!
//! Masks only reshape text while the user types. They never validate; a
//! half-typed CNIC is formatted as far as it goes and left for the rule set
//! to reject.

/// Digits in a full CNIC
pub const CNIC_DIGITS: usize = 13;

/// Digits kept in a mobile number (the country code is added on submit)
pub const MOBILE_DIGITS: usize = 10;

// Group boundaries of `XXXXX-XXXXXXX-X`
const CNIC_GROUP_A: usize = 5;
const CNIC_GROUP_B: usize = 12;

/// Which mask a field uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    /// `XXXXX-XXXXXXX-X`
    Cnic,
    /// Up to ten bare digits
    MobileNumber,
}

impl Mask {
    /// Format the full text of the input after a keystroke
    pub fn apply(self, raw: &str) -> String {
        let formatted = match self {
            Mask::Cnic => format_cnic(raw),
            Mask::MobileNumber => format_mobile_number(raw),
        };
        tracing::trace!(mask = ?self, raw, formatted = %formatted, "applied input mask");
        formatted
    }
}

fn digits(raw: &str, limit: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(limit).collect()
}

/// Reshape typed text into `XXXXX`, `XXXXX-XXXXXXX` or `XXXXX-XXXXXXX-X`
///
/// Non-digits are dropped and digits beyond the thirteenth are ignored, so the
/// result is at most 15 characters. Running it on its own output is a no-op.
///
/// ```
/// use regform::format_cnic;
/// assert_eq!(format_cnic("1234512345671"), "12345-1234567-1");
/// assert_eq!(format_cnic("123456"), "12345-6");
/// assert_eq!(format_cnic("12345"), "12345");
/// ```
pub fn format_cnic(raw: &str) -> String {
    let d = digits(raw, CNIC_DIGITS);
    let mut out = String::with_capacity(CNIC_DIGITS + 2);
    for (i, c) in d.chars().enumerate() {
        if i == CNIC_GROUP_A || i == CNIC_GROUP_B {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// Keep the first ten digits of the typed text
///
/// ```
/// use regform::format_mobile_number;
/// assert_eq!(format_mobile_number("03001234567890"), "0300123456");
/// assert_eq!(format_mobile_number("300-123 4567"), "3001234567");
/// ```
pub fn format_mobile_number(raw: &str) -> String {
    digits(raw, MOBILE_DIGITS)
}
