//! Form state: the one in-flight set of values plus the rules and handler
//! that act on it.

use chrono::{DateTime, Utc};

use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::field::Field;
use crate::result::ValidationFailure;
use crate::rules::RuleSet;
use crate::submit::{SubmissionHandler, SubmissionOutcome};
use crate::values::FormValues;

/// A registration form being filled in
///
/// Keystrokes go through [`update`](Self::update), which applies the field's
/// mask. [`submit`](Self::submit) validates every field, and only when all of
/// them pass hands the values to the submission handler and clears the form.
#[derive(Debug)]
pub struct RegistrationForm {
    values: FormValues,
    rules: RuleSet,
    handler: SubmissionHandler,
}

impl RegistrationForm {
    /// Empty form with the registration rules and tracing collaborators
    pub fn new(config: &FormConfig) -> Self {
        Self::with_handler(config, SubmissionHandler::new(config))
    }

    pub fn with_handler(config: &FormConfig, handler: SubmissionHandler) -> Self {
        Self {
            values: FormValues::default(),
            rules: RuleSet::registration(config),
            handler,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Store the new text of `field`, masked if the field has a mask
    ///
    /// Returns the value as stored.
    pub fn update(&mut self, field: Field, raw: &str) -> &str {
        let value = match field.mask() {
            Some(mask) => mask.apply(raw),
            None => raw.to_string(),
        };
        self.values.set(field, value);
        self.values.get(field)
    }

    /// [`update`](Self::update) addressed by wire key
    pub fn update_named(&mut self, name: &str, raw: &str) -> Result<&str> {
        let field: Field = name.parse()?;
        Ok(self.update(field, raw))
    }

    /// Validate one field against the current clock
    pub fn validate_field(&self, field: Field) -> Option<ValidationFailure> {
        self.rules.validate_field(field, &self.values, Utc::now())
    }

    /// Validate and, if valid, submit and reset
    pub fn submit(&mut self) -> Result<SubmissionOutcome> {
        self.submit_at(Utc::now())
    }

    /// [`submit`](Self::submit) with validation evaluated as of `now`
    ///
    /// On failure the values are kept so the user can correct them.
    pub fn submit_at(&mut self, now: DateTime<Utc>) -> Result<SubmissionOutcome> {
        let result = self.rules.validate_at(&self.values, now);
        if result.has_errors() {
            return Err(FormError::Invalid(result));
        }

        let outcome = self.handler.submit(&self.values)?;
        self.reset();
        Ok(outcome)
    }

    /// Clear every field back to empty
    pub fn reset(&mut self) {
        self.values = FormValues::default();
    }
}
