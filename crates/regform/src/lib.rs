// regform - registration form core
// Input masks, a declarative rule set and a submission handler for the
// sixteen-field registration form. No rendering, storage or networking.

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod mask;
pub mod result;
pub mod rules;
pub mod schema;
pub mod submit;
pub mod types;
pub mod values;

pub use config::FormConfig;
pub use error::FormError;
pub use field::{Field, COURSE_OPTIONS, GENDER_OPTIONS};
pub use form::RegistrationForm;
pub use mask::{format_cnic, format_mobile_number, Mask};
pub use result::{ValidationFailure, ValidationResult};
pub use rules::{Check, FieldRules, Rule, RuleSet};
pub use submit::{
    Notifier, PayloadSink, RegistrationPayload, SubmissionHandler, SubmissionOutcome,
    TracingNotifier, TracingPayloadSink,
};
pub use types::{Cnic, MobileNumber};
pub use values::FormValues;

// Re-export the predicate crate for custom rules
pub use regform_validation as validation;
pub use regform_validation::{AgePolicy, CharClass};
