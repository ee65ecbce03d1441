//! State of the CTA lead-capture form.
//!
//! A submit validates the entered values, marks the form in flight, hands one
//! [`LeadSubmission`] to the transport, and folds the outcome back into
//! [`FormStatus`]. Failures never escape as errors: they become inline state
//! and the entered values are kept so the visitor can retry.

use std::fmt;

use serde::Serialize;
use tessera_sections::cta::{FormState, MIN_AGE, Notice};

use crate::client::LeadTransport;
use crate::error::LeadError;
use crate::submission::LeadSubmission;

pub use tessera_sections::cta::PROCESSING_LABEL;

/// Confirmation shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thanks for signing up!";

/// A form input that can fail client-side checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Age,
    Consent,
}

impl FormField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Consent => "consent",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded { message: String },
    Failed { message: String },
    /// Client-side checks failed; nothing was sent.
    Invalid { fields: Vec<FormField> },
}

#[derive(Debug, Clone, Default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub age: String,
    pub consent: bool,
    pub(crate) status: FormStatus,
}

impl LeadForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn status(&self) -> &FormStatus {
        &self.status
    }

    #[must_use]
    pub const fn in_flight(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    /// Label for the submit button: the section's CTA text, or
    /// [`PROCESSING_LABEL`] while in flight.
    #[must_use]
    pub const fn button_label<'a>(&self, cta_text: &'a str) -> &'a str {
        if self.in_flight() { PROCESSING_LABEL } else { cta_text }
    }

    /// Snapshot of the entered values and status for the CTA renderer.
    #[must_use]
    pub fn view_state(&self) -> FormState<'_> {
        let (invalid, notice) = match &self.status {
            FormStatus::Idle | FormStatus::Submitting => (Vec::new(), None),
            FormStatus::Succeeded { message } => (Vec::new(), Some(Notice::Success(message))),
            FormStatus::Failed { message } => (Vec::new(), Some(Notice::Failure(message))),
            FormStatus::Invalid { fields } => {
                (fields.iter().copied().map(FormField::as_str).collect(), None)
            }
        };
        FormState {
            name: &self.name,
            email: &self.email,
            age: &self.age,
            consent: self.consent,
            in_flight: self.in_flight(),
            invalid,
            notice,
        }
    }

    /// Run the client-side checks.
    ///
    /// # Errors
    ///
    /// Returns every field that fails, in form order.
    pub fn validate(&self) -> Result<LeadSubmission, Vec<FormField>> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(FormField::Name);
        }
        if !is_plausible_email(self.email.trim()) {
            invalid.push(FormField::Email);
        }
        match self.age.trim().parse::<u32>() {
            Ok(age) if age >= u32::from(MIN_AGE) => {}
            _ => invalid.push(FormField::Age),
        }
        if !self.consent {
            invalid.push(FormField::Consent);
        }

        if !invalid.is_empty() {
            return Err(invalid);
        }
        Ok(LeadSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            age: self.age.trim().to_string(),
            consent: self.consent,
        })
    }

    /// Start a submission.
    ///
    /// Returns the body to send, or `None` when the form is already in flight
    /// or fails validation (the status then says which fields).
    pub fn begin(&mut self) -> Option<LeadSubmission> {
        if self.in_flight() {
            tracing::debug!("lead submission already in flight, ignoring submit");
            return None;
        }
        match self.validate() {
            Ok(lead) => {
                self.status = FormStatus::Submitting;
                Some(lead)
            }
            Err(fields) => {
                self.status = FormStatus::Invalid { fields };
                None
            }
        }
    }

    /// Record the outcome of the submission started by [`Self::begin`].
    pub fn complete(&mut self, outcome: Result<(), LeadError>) {
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.age.clear();
                self.consent = false;
                self.status = FormStatus::Succeeded {
                    message: SUCCESS_MESSAGE.to_string(),
                };
            }
            Err(error) => {
                tracing::warn!(%error, "lead submission failed");
                self.status = FormStatus::Failed {
                    message: error.user_message(),
                };
            }
        }
    }

    /// Validate, send through `transport`, and record the outcome.
    ///
    /// At most one request is issued per call.
    pub async fn submit<T: LeadTransport>(&mut self, transport: &T) -> &FormStatus {
        if let Some(lead) = self.begin() {
            let outcome = transport.submit(&lead).await;
            self.complete(outcome);
        }
        &self.status
    }
}

fn is_plausible_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}
