//! Submission of a validated form
//!
//! The handler normalizes the values into a payload and hands it to two
//! collaborators: a payload sink (logging/telemetry) and a notifier (the
//! success toast). Both are traits so the host decides where things go.

use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::field::Field;
use crate::types::{Cnic, MobileNumber};
use crate::values::FormValues;

/// Normalized form values as handed to the payload sink
///
/// Identical to [`FormValues`] except that `mobileNumber` carries the
/// country calling code and the CNIC is a checked [`Cnic`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
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
    pub cnic: Cnic,
    pub comments: String,
    pub password: String,
}

impl RegistrationPayload {
    /// Normalize validated values
    ///
    /// Fails only if the masked fields are not in their final shape, which
    /// the rule set already guarantees.
    pub fn from_values(values: &FormValues, country_code: &str) -> Result<Self> {
        let mobile = MobileNumber::try_new(values.mobile_number.clone()).map_err(|e| {
            FormError::Payload { field: Field::MobileNumber, message: e.to_string() }
        })?;
        let cnic = Cnic::try_new(values.cnic.clone())
            .map_err(|e| FormError::Payload { field: Field::Cnic, message: e.to_string() })?;

        Ok(Self {
            first_name: values.first_name.clone(),
            middle_name: values.middle_name.clone(),
            last_name: values.last_name.clone(),
            birth_date: values.birth_date.clone(),
            gender: values.gender.clone(),
            address: values.address.clone(),
            city: values.city.clone(),
            postal_code: values.postal_code.clone(),
            email: values.email.clone(),
            mobile_number: mobile.international(country_code),
            phone_number: values.phone_number.clone(),
            company: values.company.clone(),
            course: values.course.clone(),
            cnic,
            comments: values.comments.clone(),
            password: values.password.clone(),
        })
    }

    /// JSON form of the payload for logs, with the password left out
    pub fn log_view(&self) -> serde_json::Result<serde_json::Value> {
        let mut value = serde_json::to_value(self)?;
        if let Some(map) = value.as_object_mut() {
            map.remove("password");
        }
        Ok(value)
    }
}

/// Receives the normalized payload of every successful submission
pub trait PayloadSink {
    fn record(&self, payload: &RegistrationPayload);
}

/// Shows the success message to the user
pub trait Notifier {
    fn success(&self, message: &str);
}

/// Logs the payload as JSON through `tracing`, without the password
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPayloadSink;

impl PayloadSink for TracingPayloadSink {
    fn record(&self, payload: &RegistrationPayload) {
        match payload.log_view() {
            Ok(json) => tracing::info!(payload = %json, "Form Values"),
            Err(e) => tracing::error!("Failed to serialize registration payload: {}", e),
        }
    }
}

/// Logs the success message through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notification = message, "success notification sent");
    }
}

/// What a successful submission produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub payload: RegistrationPayload,
    /// Message shown by the notifier
    pub message: String,
}

/// Normalizes validated values and notifies the collaborators
pub struct SubmissionHandler {
    country_code: String,
    success_message: String,
    sink: Box<dyn PayloadSink>,
    notifier: Box<dyn Notifier>,
}

impl SubmissionHandler {
    /// Handler that logs through `tracing`
    pub fn new(config: &FormConfig) -> Self {
        Self::with_collaborators(config, TracingPayloadSink, TracingNotifier)
    }

    pub fn with_collaborators(
        config: &FormConfig,
        sink: impl PayloadSink + 'static,
        notifier: impl Notifier + 'static,
    ) -> Self {
        Self {
            country_code: config.country_code.clone(),
            success_message: config.success_message.clone(),
            sink: Box::new(sink),
            notifier: Box::new(notifier),
        }
    }

    /// Submit values that already passed validation
    pub fn submit(&self, values: &FormValues) -> Result<SubmissionOutcome> {
        let payload = RegistrationPayload::from_values(values, &self.country_code)?;

        self.sink.record(&payload);
        self.notifier.success(&self.success_message);

        Ok(SubmissionOutcome { payload, message: self.success_message.clone() })
    }
}

impl std::fmt::Debug for SubmissionHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionHandler")
            .field("country_code", &self.country_code)
            .field("success_message", &self.success_message)
            .finish_non_exhaustive()
    }
}
