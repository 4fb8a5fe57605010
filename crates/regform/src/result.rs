//! Outcome of a validation pass

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::Field;

/// A single field that failed, with the message of its first failing check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationFailure {
    pub field: Field,
    pub message: String,
}

/// Field-to-message map of a validation pass
///
/// A field that is not in the map passed. An empty map means the whole form
/// is valid. Iteration follows field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self::default()
    }

    /// Check if every field passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Record a failure; a field keeps the first message it was given
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.errors
            .into_iter()
            .map(|(field, message)| ValidationFailure { field, message })
            .collect()
    }
}

impl From<ValidationFailure> for ValidationResult {
    fn from(failure: ValidationFailure) -> Self {
        let mut result = Self::success();
        result.insert(failure.field, failure.message);
        result
    }
}

impl FromIterator<ValidationFailure> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        let mut result = Self::success();
        for failure in iter {
            result.insert(failure.field, failure.message);
        }
        result
    }
}
