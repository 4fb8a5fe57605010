//! The registration form's rule table

use regform_validation::{
    CharClass, CNIC, DIGITS, DIGITS_OPTIONAL, LETTERS, LETTERS_AND_SPACES,
    LETTERS_AND_SPACES_OPTIONAL, LETTERS_OPTIONAL,
};

use crate::config::FormConfig;
use crate::field::{Field, GENDERS};
use crate::mask::MOBILE_DIGITS;
use crate::rules::{FieldRules, Rule, RuleSet};

/// Build the rule set for all sixteen registration fields
pub fn registration_rules(config: &FormConfig) -> RuleSet {
    RuleSet::new()
        .with(Field::FirstName, name_rules(Field::FirstName))
        .with(Field::LastName, name_rules(Field::LastName))
        .with(
            Field::MiddleName,
            FieldRules::optional().check(
                Rule::Matches(&LETTERS_OPTIONAL),
                only_letters(Field::MiddleName),
            ),
        )
        .with(
            Field::BirthDate,
            required(Field::BirthDate)
                .check(Rule::Date, format!("{} must be a valid date", Field::BirthDate.label()))
                .check(
                    Rule::MinimumAge {
                        years: config.minimum_age_years,
                        policy: config.age_policy,
                    },
                    format!("You must be at least {} years old", config.minimum_age_years),
                ),
        )
        .with(
            Field::Gender,
            required(Field::Gender)
                .check(Rule::OneOf(GENDERS), "Invalid Gender Selection"),
        )
        .with(
            Field::Cnic,
            required(Field::Cnic)
                .check(Rule::Matches(&CNIC), "CNIC format must be XXXXX-XXXXXXX-X"),
        )
        .with(
            Field::Address,
            required(Field::Address).check(
                Rule::MinLength(5),
                format!("{} must be at least 5 characters", Field::Address.label()),
            ),
        )
        .with(
            Field::City,
            required(Field::City)
                .check(Rule::Matches(&LETTERS_AND_SPACES), only_letters(Field::City)),
        )
        .with(
            Field::PostalCode,
            required(Field::PostalCode)
                .check(Rule::Matches(&DIGITS), only_numbers(Field::PostalCode)),
        )
        .with(
            Field::Email,
            required(Field::Email).check(Rule::Email, "Invalid email format"),
        )
        .with(
            Field::MobileNumber,
            required(Field::MobileNumber)
                .check(Rule::Matches(&DIGITS), only_numbers(Field::MobileNumber))
                .check(
                    Rule::MinLength(MOBILE_DIGITS),
                    format!("{} must be at least {MOBILE_DIGITS} digits", Field::MobileNumber.label()),
                )
                .check(
                    Rule::MaxLength(MOBILE_DIGITS),
                    format!("{} must be exactly {MOBILE_DIGITS} digits", Field::MobileNumber.label()),
                ),
        )
        .with(
            Field::PhoneNumber,
            FieldRules::optional().check(
                Rule::Matches(&DIGITS_OPTIONAL),
                only_numbers(Field::PhoneNumber),
            ),
        )
        .with(
            Field::Company,
            FieldRules::optional().check(
                Rule::Matches(&LETTERS_AND_SPACES_OPTIONAL),
                "Company Name must contain only letters",
            ),
        )
        .with(Field::Course, FieldRules::required("You must select a course"))
        .with(
            Field::Comments,
            FieldRules::optional().check(
                Rule::MaxLength(config.comments_max_length),
                format!(
                    "{} must be less than {} characters",
                    Field::Comments.label(),
                    config.comments_max_length
                ),
            ),
        )
        .with(Field::Password, password_rules())
}

fn required(field: Field) -> FieldRules {
    FieldRules::required(format!("{} is required", field.label()))
}

fn only_letters(field: Field) -> String {
    format!("{} must contain only letters", field.label())
}

fn only_numbers(field: Field) -> String {
    format!("{} must contain only numbers", field.label())
}

fn name_rules(field: Field) -> FieldRules {
    let label = field.label();
    required(field)
        .check(Rule::Matches(&LETTERS), only_letters(field))
        .check(Rule::MinLength(2), format!("{label} must be at least 2 characters"))
        .check(Rule::MaxLength(50), format!("{label} must be less than 50 characters"))
}

fn password_rules() -> FieldRules {
    required(Field::Password)
        .check(Rule::MinLength(8), "Password must be at least 8 characters")
        .check(
            Rule::Contains(CharClass::Lowercase),
            "Password must contain at least one lowercase letter",
        )
        .check(
            Rule::Contains(CharClass::Uppercase),
            "Password must contain at least one uppercase letter",
        )
        .check(Rule::Contains(CharClass::Digit), "Password must contain at least one number")
        .check(
            Rule::Contains(CharClass::Symbol),
            "Password must contain at least one special character",
        )
}
