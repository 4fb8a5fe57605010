//! Declarative validation rules
//!
//! Every field owns an ordered list of checks. A field is evaluated check by
//! check and stops at the first failure; fields are evaluated independently
//! of each other and all failures are collected.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use regex::Regex;
use regform_validation::{self as v, AgePolicy, CharClass};

use crate::config::FormConfig;
use crate::field::Field;
use crate::result::{ValidationFailure, ValidationResult};
use crate::values::FormValues;

/// A single predicate over a field value
#[derive(Debug, Clone)]
pub enum Rule {
    /// Non-empty; whitespace counts as content
    Required,
    /// Whole value matches an anchored pattern
    Matches(&'static Regex),
    /// At least this many characters
    MinLength(usize),
    /// At most this many characters
    MaxLength(usize),
    /// Exactly one of the listed values
    OneOf(&'static [&'static str]),
    Email,
    /// Parses as a `YYYY-MM-DD` calendar date
    Date,
    /// Date is at least `years` before the evaluation instant
    MinimumAge { years: u32, policy: AgePolicy },
    /// Contains at least one character of the class
    Contains(CharClass),
}

impl Rule {
    pub fn passes(&self, value: &str, now: DateTime<Utc>) -> bool {
        match self {
            Rule::Required => v::is_present(value),
            Rule::Matches(pattern) => v::matches(value, pattern),
            Rule::MinLength(min) => v::has_min_length(value, *min),
            Rule::MaxLength(max) => v::has_max_length(value, *max),
            Rule::OneOf(allowed) => v::is_one_of(value, allowed),
            Rule::Email => v::is_valid_email(value),
            Rule::Date => v::is_valid_date(value),
            Rule::MinimumAge { years, policy } => v::parse_date(value)
                .is_some_and(|birth| v::is_at_least_age(birth, *years, now, *policy)),
            Rule::Contains(class) => v::contains_class(value, *class),
        }
    }
}

/// A rule paired with the message shown when it fails
#[derive(Debug, Clone)]
pub struct Check {
    pub rule: Rule,
    pub message: String,
}

/// Ordered checks for one field
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    /// Optional fields skip every check while empty
    pub optional: bool,
    pub checks: Vec<Check>,
}

impl FieldRules {
    /// Start a required field; emptiness fails with `message`
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            optional: false,
            checks: vec![Check { rule: Rule::Required, message: message.into() }],
        }
    }

    /// Start an optional field
    pub fn optional() -> Self {
        Self { optional: true, checks: Vec::new() }
    }

    /// Append a check
    pub fn check(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.checks.push(Check { rule, message: message.into() });
        self
    }

    /// Message of the first failing check, if any
    pub fn evaluate(&self, value: &str, now: DateTime<Utc>) -> Option<&str> {
        if self.optional && value.is_empty() {
            return None;
        }
        self.checks
            .iter()
            .find(|check| !check.rule.passes(value, now))
            .map(|check| check.message.as_str())
    }
}

/// Rules for every field of a form
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: BTreeMap<Field, FieldRules>,
}

impl RuleSet {
    /// Empty rule set; every value passes
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules of the registration form
    pub fn registration(config: &FormConfig) -> Self {
        crate::schema::registration_rules(config)
    }

    /// Replace the rules of `field`
    pub fn insert(&mut self, field: Field, rules: FieldRules) {
        self.fields.insert(field, rules);
    }

    pub fn with(mut self, field: Field, rules: FieldRules) -> Self {
        self.insert(field, rules);
        self
    }

    pub fn get(&self, field: Field) -> Option<&FieldRules> {
        self.fields.get(&field)
    }

    /// Validate every field against the current clock
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        self.validate_at(values, Utc::now())
    }

    /// Validate every field as of `now`
    ///
    /// Pure: identical inputs give identical results.
    pub fn validate_at(&self, values: &FormValues, now: DateTime<Utc>) -> ValidationResult {
        let result: ValidationResult = self
            .fields
            .keys()
            .filter_map(|field| self.validate_field(*field, values, now))
            .collect();

        if result.has_errors() {
            tracing::debug!(failed = result.len(), "registration form failed validation");
        }
        result
    }

    /// Validate a single field as of `now`
    pub fn validate_field(
        &self,
        field: Field,
        values: &FormValues,
        now: DateTime<Utc>,
    ) -> Option<ValidationFailure> {
        let rules = self.fields.get(&field)?;
        rules.evaluate(values.get(field), now).map(|message| ValidationFailure {
            field,
            message: message.to_string(),
        })
    }
}
