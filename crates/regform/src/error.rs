//! Errors surfaced by the form

use thiserror::Error;

use crate::field::Field;
use crate::result::ValidationResult;

#[derive(Debug, Error)]
pub enum FormError {
    /// One or more fields failed their rules; the map says which and why
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ValidationResult),

    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// A validated value could not be turned into its typed payload form
    #[error("cannot build payload from {field}: {message}")]
    Payload { field: Field, message: String },
}

impl FormError {
    /// Validation errors, when this is [`FormError::Invalid`]
    pub fn validation(&self) -> Option<&ValidationResult> {
        match self {
            FormError::Invalid(result) => Some(result),
            _ => None,
        }
    }
}

pub type Result<T, E = FormError> = std::result::Result<T, E>;
