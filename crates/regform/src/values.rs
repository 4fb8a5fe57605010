//! Raw form values, one string per field

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Current contents of every registration field
///
/// All fields start empty. `birth_date` holds the `YYYY-MM-DD` text of a
/// date input; it is parsed during validation, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub email: String,
    pub mobile_number: String,
    pub phone_number: String,
    pub company: String,
    pub course: String,
    pub cnic: String,
    pub comments: String,
    pub password: String,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        self.slot(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// True when every field is still empty
    pub fn is_pristine(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }

    /// Iterate `(field, value)` in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    fn slot(&self, field: Field) -> &String {
        match field {
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::LastName => &self.last_name,
            Field::BirthDate => &self.birth_date,
            Field::Gender => &self.gender,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::PostalCode => &self.postal_code,
            Field::Email => &self.email,
            Field::MobileNumber => &self.mobile_number,
            Field::PhoneNumber => &self.phone_number,
            Field::Company => &self.company,
            Field::Course => &self.course,
            Field::Cnic => &self.cnic,
            Field::Comments => &self.comments,
            Field::Password => &self.password,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::MiddleName => &mut self.middle_name,
            Field::LastName => &mut self.last_name,
            Field::BirthDate => &mut self.birth_date,
            Field::Gender => &mut self.gender,
            Field::Address => &mut self.address,
            Field::City => &mut self.city,
            Field::PostalCode => &mut self.postal_code,
            Field::Email => &mut self.email,
            Field::MobileNumber => &mut self.mobile_number,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Company => &mut self.company,
            Field::Course => &mut self.course,
            Field::Cnic => &mut self.cnic,
            Field::Comments => &mut self.comments,
            Field::Password => &mut self.password,
        }
    }
}
