//! Validated types for the two masked fields
//!
//! These only exist once the rule set has passed; constructing them from a
//! raw value re-checks the shape at the type level.

use nutype::nutype;
use regform_validation::is_cnic;

use crate::mask::MOBILE_DIGITS;

/// National identity number in `XXXXX-XXXXXXX-X` form
///
/// # Example
///
/// ```rust
/// use regform::Cnic;
///
/// assert!(Cnic::try_new("12345-1234567-1".to_string()).is_ok());
/// assert!(Cnic::try_new("1234512345671".to_string()).is_err());
/// ```
#[nutype(
    validate(predicate = is_cnic),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Cnic(String);

/// Ten-digit mobile number, without country code
#[nutype(
    validate(predicate = is_mobile_number),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct MobileNumber(String);

fn is_mobile_number(s: &str) -> bool {
    s.len() == MOBILE_DIGITS && s.bytes().all(|b| b.is_ascii_digit())
}

impl MobileNumber {
    /// Prefix with a calling code, e.g. `+92` + `3001234567`
    pub fn international(&self, country_code: &str) -> String {
        let digits: &str = self.as_ref();
        format!("{country_code}{digits}")
    }
}
