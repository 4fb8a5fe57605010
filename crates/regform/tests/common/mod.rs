// Shared fixtures for the integration tests
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use regform::{Field, FormValues};

/// Fixed evaluation instant so age checks do not depend on the wall clock
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap()
}

/// Values that satisfy every registration rule
pub fn valid_values() -> FormValues {
    FormValues::new()
        .with(Field::FirstName, "Ayesha")
        .with(Field::MiddleName, "Noor")
        .with(Field::LastName, "Khan")
        .with(Field::BirthDate, "1995-06-15")
        .with(Field::Gender, "female")
        .with(Field::Address, "House 12, Street 4")
        .with(Field::City, "Lahore")
        .with(Field::PostalCode, "54000")
        .with(Field::Email, "ayesha.khan@example.com")
        .with(Field::MobileNumber, "3001234567")
        .with(Field::PhoneNumber, "0421234567")
        .with(Field::Company, "Acme Labs")
        .with(Field::Course, "web-development")
        .with(Field::Cnic, "35202-1234567-1")
        .with(Field::Comments, "Looking forward to it.")
        .with(Field::Password, "Secure@Pass1")
}
