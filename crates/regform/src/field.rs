//! The sixteen registration fields and the option sets behind the two
//! select inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::mask::Mask;

/// A registration form field
///
/// Ordering follows declaration order, which is also the order the form
/// renders and the order validation errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    MiddleName,
    LastName,
    BirthDate,
    Gender,
    Address,
    City,
    PostalCode,
    Email,
    MobileNumber,
    PhoneNumber,
    Company,
    Course,
    Cnic,
    Comments,
    Password,
}

impl Field {
    pub const ALL: [Field; 16] = [
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::BirthDate,
        Field::Gender,
        Field::Address,
        Field::City,
        Field::PostalCode,
        Field::Email,
        Field::MobileNumber,
        Field::PhoneNumber,
        Field::Company,
        Field::Course,
        Field::Cnic,
        Field::Comments,
        Field::Password,
    ];

    /// Wire key, as used in payloads and by the presentation layer
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::MiddleName => "middleName",
            Field::LastName => "lastName",
            Field::BirthDate => "birthDate",
            Field::Gender => "gender",
            Field::Address => "address",
            Field::City => "city",
            Field::PostalCode => "postalCode",
            Field::Email => "email",
            Field::MobileNumber => "mobileNumber",
            Field::PhoneNumber => "phoneNumber",
            Field::Company => "company",
            Field::Course => "course",
            Field::Cnic => "cnic",
            Field::Comments => "comments",
            Field::Password => "password",
        }
    }

    /// Human label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::MiddleName => "Middle Name",
            Field::LastName => "Last Name",
            Field::BirthDate => "Birth Date",
            Field::Gender => "Gender",
            Field::Address => "Street Address",
            Field::City => "City",
            Field::PostalCode => "Postal Code",
            Field::Email => "Email",
            Field::MobileNumber => "Mobile Number",
            Field::PhoneNumber => "Phone Number",
            Field::Company => "Company",
            Field::Course => "Course",
            Field::Cnic => "CNIC",
            Field::Comments => "Comments",
            Field::Password => "Password",
        }
    }

    /// Input mask applied on every keystroke, if any
    pub fn mask(self) -> Option<Mask> {
        match self {
            Field::Cnic => Some(Mask::Cnic),
            Field::MobileNumber => Some(Mask::MobileNumber),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// `(value, label)` pairs for the gender select
pub const GENDER_OPTIONS: &[(&str, &str)] = &[("male", "Male"), ("female", "Female")];

/// `(value, label)` pairs for the course select
///
/// The rule set only requires a course to be chosen; it does not check the
/// value against this list.
pub const COURSE_OPTIONS: &[(&str, &str)] = &[
    ("web-development", "Web Development"),
    ("app-development", "App Development"),
    ("graphic-designing", "Graphic Designing"),
];

/// Accepted gender values
pub const GENDERS: &[&str] = &["male", "female"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Field::Address.label(), "Street Address");
        assert_eq!(Field::Cnic.label(), "CNIC");
        assert_eq!(Field::PostalCode.label(), "Postal Code");
    }

    #[test]
    fn test_unknown_field() {
        let err = "nickname".parse::<Field>().unwrap_err();
        assert!(matches!(err, FormError::UnknownField(name) if name == "nickname"));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Field::PostalCode).unwrap(), "\"postalCode\"");
        assert_eq!(serde_json::to_string(&Field::Cnic).unwrap(), "\"cnic\"");
    }

    #[test]
    fn test_only_cnic_and_mobile_are_masked() {
        let masked: Vec<Field> = Field::ALL.into_iter().filter(|f| f.mask().is_some()).collect();
        assert_eq!(masked, vec![Field::MobileNumber, Field::Cnic]);
    }

    #[test]
    fn test_gender_options_match_accepted_values() {
        let values: Vec<&str> = GENDER_OPTIONS.iter().map(|(value, _)| *value).collect();
        assert_eq!(values, GENDERS);
    }
}
