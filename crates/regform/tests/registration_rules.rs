mod common;

use common::{now, valid_values};
use pretty_assertions::assert_eq;
use regform::{AgePolicy, Field, FormConfig, RuleSet};
use rstest::rstest;

fn rules() -> RuleSet {
    RuleSet::registration(&FormConfig::default())
}

#[test]
fn valid_form_has_no_errors() {
    let result = rules().validate_at(&valid_values(), now());
    assert!(result.is_valid(), "unexpected errors: {:?}", result);
}

#[test]
fn validation_is_repeatable() {
    let values = valid_values()
        .with(Field::Password, "abc12345")
        .with(Field::Email, "nope");
    let rules = rules();
    assert_eq!(rules.validate_at(&values, now()), rules.validate_at(&values, now()));
}

#[rstest]
#[case(Field::FirstName, "First Name is required")]
#[case(Field::LastName, "Last Name is required")]
#[case(Field::BirthDate, "Birth Date is required")]
#[case(Field::Gender, "Gender is required")]
#[case(Field::Cnic, "CNIC is required")]
#[case(Field::Address, "Street Address is required")]
#[case(Field::City, "City is required")]
#[case(Field::PostalCode, "Postal Code is required")]
#[case(Field::Email, "Email is required")]
#[case(Field::MobileNumber, "Mobile Number is required")]
#[case(Field::Course, "You must select a course")]
#[case(Field::Password, "Password is required")]
fn emptying_a_required_field_fails_only_that_field(#[case] field: Field, #[case] message: &str) {
    let values = valid_values().with(field, "");
    let result = rules().validate_at(&values, now());

    let failures: Vec<(Field, &str)> = result.iter().collect();
    assert_eq!(failures, vec![(field, message)]);
}

#[rstest]
#[case(Field::MiddleName)]
#[case(Field::PhoneNumber)]
#[case(Field::Company)]
#[case(Field::Comments)]
fn optional_fields_may_be_empty(#[case] field: Field) {
    let values = valid_values().with(field, "");
    assert!(rules().validate_at(&values, now()).is_valid());
}

#[rstest]
#[case(Field::FirstName, "Ali1", "First Name must contain only letters")]
#[case(Field::FirstName, "A", "First Name must be at least 2 characters")]
#[case(Field::FirstName, " Ali", "First Name must contain only letters")]
#[case(Field::LastName, "Khan-Ali", "Last Name must contain only letters")]
#[case(Field::LastName, "K", "Last Name must be at least 2 characters")]
#[case(Field::MiddleName, "J.", "Middle Name must contain only letters")]
#[case(Field::BirthDate, "2001-02-29", "Birth Date must be a valid date")]
#[case(Field::BirthDate, "15/06/1995", "Birth Date must be a valid date")]
#[case(Field::BirthDate, "1995-6-5", "Birth Date must be a valid date")]
#[case(Field::BirthDate, "+1995-06-15", "Birth Date must be a valid date")]
#[case(Field::BirthDate, "2026-10-15", "You must be at least 18 years old")]
#[case(Field::BirthDate, "2010-01-01", "You must be at least 18 years old")]
#[case(Field::Gender, "other", "Invalid Gender Selection")]
#[case(Field::Gender, "Male", "Invalid Gender Selection")]
#[case(Field::Cnic, "3520212345671", "CNIC format must be XXXXX-XXXXXXX-X")]
#[case(Field::Cnic, "35202-1234567", "CNIC format must be XXXXX-XXXXXXX-X")]
#[case(Field::Address, "Home", "Street Address must be at least 5 characters")]
#[case(Field::City, "Lahore 2", "City must contain only letters")]
#[case(Field::PostalCode, "54-000", "Postal Code must contain only numbers")]
#[case(Field::Email, "ayesha@", "Invalid email format")]
#[case(Field::Email, "ayesha.example.com", "Invalid email format")]
#[case(Field::MobileNumber, "300123456a", "Mobile Number must contain only numbers")]
#[case(Field::MobileNumber, "+923001234", "Mobile Number must contain only numbers")]
#[case(Field::MobileNumber, "300123456", "Mobile Number must be at least 10 digits")]
#[case(Field::MobileNumber, "30012345678", "Mobile Number must be exactly 10 digits")]
#[case(Field::PhoneNumber, "042-111", "Phone Number must contain only numbers")]
#[case(Field::Company, "Acme & Sons", "Company Name must contain only letters")]
#[case(Field::Password, "Sh0rt!A", "Password must be at least 8 characters")]
#[case(Field::Password, "ABC12345!", "Password must contain at least one lowercase letter")]
#[case(Field::Password, "abc12345", "Password must contain at least one uppercase letter")]
#[case(Field::Password, "Abcdefgh!", "Password must contain at least one number")]
#[case(Field::Password, "Abcdefg1", "Password must contain at least one special character")]
fn first_failing_rule_is_reported(#[case] field: Field, #[case] value: &str, #[case] message: &str) {
    let values = valid_values().with(field, value);
    let result = rules().validate_at(&values, now());

    assert_eq!(result.len(), 1, "expected only {field} to fail: {:?}", result);
    assert_eq!(result.error(field), Some(message));
}

#[test]
fn name_length_limit_is_inclusive() {
    let rules = rules();
    let fifty = "a".repeat(50);
    let fifty_one = "a".repeat(51);

    assert!(rules.validate_at(&valid_values().with(Field::FirstName, fifty), now()).is_valid());
    let result = rules.validate_at(&valid_values().with(Field::LastName, fifty_one), now());
    assert_eq!(
        result.error(Field::LastName),
        Some("Last Name must be less than 50 characters")
    );
}

#[test]
fn comments_limit_counts_characters() {
    let rules = rules();
    let at_limit = "é".repeat(500);
    let over_limit = "x".repeat(501);

    assert!(rules.validate_at(&valid_values().with(Field::Comments, at_limit), now()).is_valid());
    let result = rules.validate_at(&valid_values().with(Field::Comments, over_limit), now());
    assert_eq!(
        result.error(Field::Comments),
        Some("Comments must be less than 500 characters")
    );
}

#[test]
fn whitespace_is_significant() {
    let rules = rules();
    // Five spaces is a five character address.
    assert!(rules.validate_at(&valid_values().with(Field::Address, "     "), now()).is_valid());
    assert!(rules.validate_at(&valid_values().with(Field::City, "Dera Ghazi Khan"), now()).is_valid());
    assert!(rules.validate_at(&valid_values().with(Field::Course, " "), now()).is_valid());

    let result = rules.validate_at(&valid_values().with(Field::Email, "ayesha@example.com "), now());
    assert_eq!(result.error(Field::Email), Some("Invalid email format"));
}

#[test]
fn course_is_not_checked_against_options() {
    let values = valid_values().with(Field::Course, "underwater-basket-weaving");
    assert!(rules().validate_at(&values, now()).is_valid());
}

#[test]
fn every_failing_field_is_reported() {
    let values = valid_values()
        .with(Field::Password, "abc12345")
        .with(Field::Cnic, "35202")
        .with(Field::Gender, "");

    let result = rules().validate_at(&values, now());
    let failures: Vec<(Field, &str)> = result.iter().collect();
    assert_eq!(
        failures,
        vec![
            (Field::Gender, "Gender is required"),
            (Field::Cnic, "CNIC format must be XXXXX-XXXXXXX-X"),
            (Field::Password, "Password must contain at least one uppercase letter"),
        ]
    );
}

#[test]
fn empty_form_fails_every_required_field() {
    let result = rules().validate_at(&regform::FormValues::new(), now());
    assert_eq!(result.len(), 12);
    assert!(result.error(Field::MiddleName).is_none());
    assert!(result.error(Field::Comments).is_none());
}

#[test]
fn approximate_age_cutoff_ignores_leap_days() {
    // 18 * 365 days before 2026-10-15T09:30Z lands on 2008-10-19T09:30Z.
    let rules = rules();
    let on_cutoff_day = valid_values().with(Field::BirthDate, "2008-10-19");
    let day_after = valid_values().with(Field::BirthDate, "2008-10-20");

    assert!(rules.validate_at(&on_cutoff_day, now()).is_valid());
    assert_eq!(
        rules.validate_at(&day_after, now()).error(Field::BirthDate),
        Some("You must be at least 18 years old")
    );
}

#[test]
fn calendar_age_policy_uses_birthdays() {
    let config = FormConfig { age_policy: AgePolicy::Calendar, ..FormConfig::default() };
    let rules = RuleSet::registration(&config);

    let eighteenth_birthday = valid_values().with(Field::BirthDate, "2008-10-15");
    let day_before_birthday = valid_values().with(Field::BirthDate, "2008-10-16");

    assert!(rules.validate_at(&eighteenth_birthday, now()).is_valid());
    assert!(rules.validate_at(&day_before_birthday, now()).has_errors());
}

#[test]
fn single_field_validation() {
    let rules = rules();
    let values = valid_values().with(Field::Email, "not-an-email");

    let failure = rules.validate_field(Field::Email, &values, now()).unwrap();
    assert_eq!(failure.field, Field::Email);
    assert_eq!(failure.message, "Invalid email format");
    assert!(rules.validate_field(Field::FirstName, &values, now()).is_none());
}
